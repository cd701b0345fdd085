//! Render loop driver: owns the body tree, camera and clock, dispatches
//! commands and produces one [`Frame`] per clock tick.

mod command;
mod draw;
mod input;
mod queries;

pub use command::Command;
pub use draw::{DrawCommand, DrawList, MeshKind, ORBIT_COLOR};
use rustc_hash::FxHashSet;

use crate::assets::{ProgramKind, ProgramRegistry, TextureRegistry};
use crate::camera::{CameraState, ViewProjection};
use crate::error::SolariumError;
use crate::geometry::SharedMeshes;
use crate::options::Options;
use crate::scene::{catalog, BodyId, LightSet, SolarSystem};
use crate::util::frame_timing::{FrameClock, FrameTick};

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Camera matrices for this frame.
    pub view_projection: ViewProjection,
    /// Luminous bodies for planet shading.
    pub lights: LightSet,
    /// Ordered draw commands.
    pub draw_list: DrawList,
    /// Simulated time the transforms were computed for (ms).
    pub time: f64,
    /// Most recent FPS measurement.
    pub fps: f64,
}

/// The solar-system viewer core.
///
/// Owns the body tree, the camera and the frame clock, plus the host's
/// program and texture registries. Everything runs on the caller's thread;
/// a frame runs to completion inside [`frame`](Self::frame).
///
/// # Frame loop
///
/// Call [`pump`](Self::pump) from the host's animation callback with its
/// timestamp. Input arrives through [`execute`](Self::execute) (commands
/// from the [`InputProcessor`](crate::input::InputProcessor)) and
/// [`apply_ui`](Self::apply_ui) (UI control changes); hash navigation goes
/// through [`navigate`](Self::navigate).
pub struct Engine {
    system: SolarSystem,
    camera: CameraState,
    clock: FrameClock,
    options: Options,
    programs: ProgramRegistry,
    textures: TextureRegistry,
    meshes: SharedMeshes,
    /// Failed programs already reported, so each is logged once.
    warned_programs: FxHashSet<ProgramKind>,
}

impl Engine {
    /// Build the engine over the built-in catalog, select the configured
    /// default body and start the clock.
    ///
    /// # Errors
    ///
    /// Returns [`SolariumError::InvalidSystem`] if the catalog fails to
    /// build.
    pub fn new(options: Options) -> Result<Self, SolariumError> {
        let system = catalog::solar_system()?;
        let animation = &options.animation;
        let mut clock =
            FrameClock::new(animation.max_fps, animation.fps_samples, animation.speed);
        clock.start();
        let meshes = SharedMeshes::new(&options.geometry);

        let mut engine = Self {
            system,
            camera: CameraState::new(&options.camera),
            clock,
            options,
            programs: ProgramRegistry::new(),
            textures: TextureRegistry::new(),
            meshes,
            warned_programs: FxHashSet::default(),
        };
        let default_address = engine.options.navigation.default_address.clone();
        let _ = engine.navigate(&default_address);
        log::info!("Engine ready with {} bodies", engine.system.len());
        Ok(engine)
    }

    /// Select the body at `address`, falling back to the configured default
    /// address (and then the root) when it does not resolve.
    pub fn navigate(&mut self, address: &str) -> BodyId {
        let id = self
            .system
            .resolve_or_default(address, &self.options.navigation.default_address);
        self.camera.selected = Some(id);
        log::debug!("navigated to {address:?} -> {id:?}");
        id
    }

    /// Advance the clock to host timestamp `now` (ms) and produce a frame
    /// if one is due.
    pub fn pump(&mut self, now: f64, aspect: f32) -> Option<Frame> {
        let tick = self.clock.tick(now)?;
        Some(self.frame(tick, aspect))
    }

    /// Produce the frame for `tick`: propagate transforms, re-validate the
    /// selection, compose the camera, collect lights and build the draw
    /// list.
    pub fn frame(&mut self, tick: FrameTick, aspect: f32) -> Frame {
        self.system.update(tick.time);

        if !self
            .camera
            .selected
            .is_some_and(|id| self.system.contains(id))
        {
            let default_address = self.options.navigation.default_address.clone();
            let _ = self.navigate(&default_address);
        }

        let view_projection =
            self.camera
                .view_projection(&self.system, aspect, &self.options.camera);
        let draw_list = DrawList::build(
            &self.system,
            &self.programs,
            &self.textures,
            &mut self.warned_programs,
        );

        Frame {
            view_projection,
            lights: LightSet::collect(&self.system),
            draw_list,
            time: tick.time,
            fps: tick.fps,
        }
    }
}

//! Per-frame draw list: what to draw, with which program, model matrix and
//! texture. The host binds and submits; the engine only decides.

use glam::{Mat4, Vec4};
use rustc_hash::FxHashSet;

use crate::assets::{
    ProgramHandle, ProgramKind, ProgramRegistry, ProgramStatus, TextureHandle,
    TextureRegistry,
};
use crate::scene::{BodyId, SolarSystem};

/// Color of orbit rings.
pub const ORBIT_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Texture bound to the skybox sphere.
const SKYBOX_TEXTURE: &str = "stars";

/// Which shared mesh a command draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// Unit sphere around the eye, drawn with the rotation-only view.
    Skybox,
    /// Unit sphere placed by the model matrix.
    Sphere,
    /// Unit circle line loop placed by the model matrix.
    OrbitRing,
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Logical program.
    pub program: ProgramKind,
    /// Host handle of the linked program.
    pub handle: ProgramHandle,
    /// Mesh to draw.
    pub mesh: MeshKind,
    /// Model matrix (`Model` in the shaders).
    pub model: Mat4,
    /// Flat color for line programs.
    pub color: Option<Vec4>,
    /// Texture to bind, `None` for the untextured fallback.
    pub texture: Option<TextureHandle>,
    /// Body this command belongs to.
    pub body: Option<BodyId>,
}

/// Ordered draw commands for one frame: the skybox, then for every body
/// depth-first its orbit ring followed by its surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Commands in submission order.
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Build the list from the transforms of the last update.
    ///
    /// Commands whose program is not linked are dropped; failed programs
    /// are reported once each through `warned`.
    pub(crate) fn build(
        system: &SolarSystem,
        programs: &ProgramRegistry,
        textures: &TextureRegistry,
        warned: &mut FxHashSet<ProgramKind>,
    ) -> Self {
        let mut list = Self::default();
        let mut push = |program: ProgramKind,
                        mesh: MeshKind,
                        model: Mat4,
                        color: Option<Vec4>,
                        texture: Option<&str>,
                        body: Option<BodyId>| {
            let Some(handle) = linked(programs, program, warned) else {
                return;
            };
            let texture = texture.and_then(|name| {
                let handle = textures.get(name);
                if handle.is_none() {
                    log::debug!("texture {name:?} not ready, drawing untextured");
                }
                handle
            });
            list.commands.push(DrawCommand {
                program,
                handle,
                mesh,
                model,
                color,
                texture,
                body,
            });
        };

        push(
            ProgramKind::Skybox,
            MeshKind::Skybox,
            Mat4::IDENTITY,
            None,
            Some(SKYBOX_TEXTURE),
            None,
        );

        for id in system.ids() {
            let (Some(body), Some(transform)) = (system.body(id), system.transform(id))
            else {
                continue;
            };
            if body.orbital_distance.is_some_and(|d| d != 0.0) {
                push(
                    ProgramKind::Simple,
                    MeshKind::OrbitRing,
                    transform.orbit,
                    Some(ORBIT_COLOR),
                    None,
                    Some(id),
                );
            }
            if body.radius.is_some_and(|r| r != 0.0) {
                let program = if body.is_luminous() {
                    ProgramKind::Star
                } else {
                    ProgramKind::Planet
                };
                push(
                    program,
                    MeshKind::Sphere,
                    transform.surface,
                    None,
                    body.texture.as_deref(),
                    Some(id),
                );
            }
        }

        list
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn linked(
    programs: &ProgramRegistry,
    kind: ProgramKind,
    warned: &mut FxHashSet<ProgramKind>,
) -> Option<ProgramHandle> {
    match programs.status(kind) {
        Some(ProgramStatus::Linked(handle)) => Some(handle),
        Some(ProgramStatus::Failed) => {
            if warned.insert(kind) {
                log::warn!("{kind:?} program failed to link, skipping its draws");
            }
            None
        }
        None => None,
    }
}

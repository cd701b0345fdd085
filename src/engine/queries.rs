//! Read-only queries and collaborator accessors for [`Engine`].

use super::Engine;
use crate::assets::{ProgramRegistry, TextureRegistry};
use crate::camera::CameraState;
use crate::geometry::SharedMeshes;
use crate::options::Options;
use crate::scene::{BodyId, BodySummary, SolarSystem};
use crate::util::frame_timing::FrameClock;

// ── Scene ──

impl Engine {
    /// The body tree with the transforms of the last frame.
    #[must_use]
    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    /// Currently selected body.
    #[must_use]
    pub fn selected(&self) -> Option<BodyId> {
        self.camera.selected
    }

    /// Address of the selected body, for writing back to the page hash.
    #[must_use]
    pub fn selected_address(&self) -> Option<String> {
        self.system.path(self.camera.selected?)
    }

    /// Info-panel summary of the selected body.
    #[must_use]
    pub fn summary(&self) -> Option<BodySummary> {
        BodySummary::of(&self.system, self.camera.selected?)
    }
}

// ── Camera and clock ──

impl Engine {
    /// Camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Mutable camera state.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// Frame clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Resources ──

impl Engine {
    /// Sphere and ring meshes for the host to upload once.
    #[must_use]
    pub fn meshes(&self) -> &SharedMeshes {
        &self.meshes
    }

    /// Program link status reported by the host.
    pub fn programs_mut(&mut self) -> &mut ProgramRegistry {
        &mut self.programs
    }

    /// Texture readiness reported by the host.
    pub fn textures_mut(&mut self) -> &mut TextureRegistry {
        &mut self.textures
    }
}

//! Command and UI-event dispatch for [`Engine`].

use super::{Command, Engine};
use crate::input::UiEvent;

impl Engine {
    /// Execute a single command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ArcballDrag { from, to } => self.camera.drag(from, to),
            Command::Zoom { delta } => {
                self.camera.zoom_by(delta, &self.options.camera);
            }
            Command::ResetCamera => self.camera.reset(),
            Command::SetViewDirection(direction) => {
                self.camera.view_direction = direction;
            }
            Command::ToggleViewDirection => {
                self.camera.view_direction = self.camera.view_direction.flipped();
            }
            Command::SetRotationLock(lock) => self.camera.rotation_lock = lock,
            Command::CycleRotationLock => {
                self.camera.rotation_lock = self.camera.rotation_lock.next();
            }
            Command::Navigate { address } => {
                let _ = self.navigate(&address);
            }
            Command::SelectParent => {
                if let Some(parent) =
                    self.camera.selected.and_then(|id| self.system.parent(id))
                {
                    self.camera.selected = Some(parent);
                }
            }
            Command::SetSpeed(speed) => self.clock.set_speed(speed),
            Command::ScaleSpeed { factor } => {
                self.clock.set_speed(self.clock.speed() * factor);
            }
            Command::TogglePause => {
                if self.clock.is_running() {
                    self.clock.stop();
                } else {
                    self.clock.start();
                }
            }
        }
    }

    /// Apply the latest value of a UI control.
    pub fn apply_ui(&mut self, event: UiEvent) {
        self.execute(match event {
            UiEvent::ViewDirection(direction) => Command::SetViewDirection(direction),
            UiEvent::RotationLock(lock) => Command::SetRotationLock(lock),
            UiEvent::Speed(speed) => Command::SetSpeed(speed),
        });
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Frame pacing and simulated-time speed.
pub struct AnimationOptions {
    /// Frame-rate cap; sets the minimum inter-frame interval (0 = uncapped).
    #[schemars(title = "Max FPS", range(min = 0, max = 240))]
    pub max_fps: u32,
    /// Number of frames averaged per FPS measurement.
    #[schemars(skip)]
    pub fps_samples: u32,
    /// Simulated milliseconds per wall-clock millisecond.
    #[schemars(title = "Speed", range(min = 0.0, max = 10000.0), extend("step" = 1.0))]
    pub speed: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            max_fps: 120,
            fps_samples: 60,
            speed: 1.0,
        }
    }
}

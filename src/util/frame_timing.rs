//! Frame clock driving the render loop.

use web_time::{Duration, Instant};

/// What the clock hands the per-frame update when a frame is due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Host timestamp (ms) of the previous frame that ran.
    pub previous: f64,
    /// Accumulated simulated time in milliseconds.
    pub time: f64,
    /// Most recent FPS measurement (0 until the first sample window closes).
    pub fps: f64,
}

/// Frame clock with a minimum frame interval, a speed multiplier for
/// simulated time and windowed FPS measurement.
///
/// Timestamps are host milliseconds (what a browser's animation callback
/// passes); [`FrameClock::now_ms`] supplies them from a monotonic clock on
/// native hosts.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Minimum time between frames (zero = unlimited).
    min_interval: Duration,
    /// Frames per FPS measurement window.
    fps_samples: u32,
    /// Speed restored by `start`.
    start_speed: f64,
    speed: f64,
    running: bool,
    /// Simulated time in milliseconds.
    time: f64,
    /// Timestamp of the last frame that ran.
    previous: Option<f64>,
    samples: u32,
    sample_time: f64,
    fps: f64,
    epoch: Instant,
}

impl FrameClock {
    /// Create a stopped clock capped at `max_fps` (0 = unlimited) that
    /// measures FPS over `fps_samples` frames and runs at `speed` once
    /// started.
    #[must_use]
    pub fn new(max_fps: u32, fps_samples: u32, speed: f64) -> Self {
        let min_interval = if max_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(max_fps))
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            fps_samples: fps_samples.max(1),
            start_speed: speed,
            speed: 0.0,
            running: false,
            time: 0.0,
            previous: None,
            samples: 0,
            sample_time: 0.0,
            fps: 0.0,
            epoch: Instant::now(),
        }
    }

    /// Start (or restart) the clock. The next tick only anchors the frame
    /// interval; frames are produced from the one after.
    pub fn start(&mut self) {
        self.running = true;
        self.speed = self.start_speed;
        self.previous = None;
        log::debug!("frame clock started at speed {}", self.speed);
    }

    /// Stop the clock. Speed drops to zero and the FPS window is cleared;
    /// simulated time is kept.
    pub fn stop(&mut self) {
        self.running = false;
        self.speed = 0.0;
        self.samples = 0;
        self.sample_time = 0.0;
        self.fps = 0.0;
        log::debug!("frame clock stopped at t = {:.0} ms", self.time);
    }

    /// Whether ticks currently produce frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set the simulated-time multiplier. Takes effect on the next frame.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        log::debug!("animation speed set to {speed}");
    }

    /// Current simulated-time multiplier.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Most recent FPS measurement.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Accumulated simulated time in milliseconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Milliseconds since the clock was created, for hosts without their
    /// own frame timestamps.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1e3
    }

    /// Advance to host timestamp `now` (ms). Returns a tick when a frame
    /// is due: the clock is running and at least the minimum interval has
    /// passed since the previous frame.
    pub fn tick(&mut self, now: f64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let Some(previous) = self.previous else {
            self.previous = Some(now);
            return None;
        };

        let delta = now - previous;
        if delta < self.min_interval.as_secs_f64() * 1e3 {
            return None;
        }

        self.time += delta * self.speed;
        self.sample_time += delta;
        self.samples += 1;
        if self.samples >= self.fps_samples {
            if self.sample_time > 0.0 {
                self.fps = f64::from(self.fps_samples) * 1e3 / self.sample_time;
            }
            self.samples = 0;
            self.sample_time = 0.0;
        }
        self.previous = Some(now);

        Some(FrameTick {
            previous,
            time: self.time,
            fps: self.fps,
        })
    }
}

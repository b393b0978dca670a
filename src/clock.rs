use std::thread;
use std::time::{Duration, Instant};

/// Spin for the last stretch of a frame instead of sleeping through it, since
/// `thread::sleep` tends to overshoot by a millisecond or two.
const SPIN_MARGIN: Duration = Duration::from_millis(2);

/// Holds the main loop to a fixed frame rate.
pub struct FrameClock {
    frame: Duration,
    started: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            started: now,
            last_tick: now,
        }
    }

    #[cfg(test)]
    fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Waits until a full frame has passed since the previous tick and
    /// returns the time that actually elapsed.
    pub fn tick(&mut self) -> Duration {
        let deadline = self.last_tick + self.frame;

        let now = Instant::now();
        if deadline > now + SPIN_MARGIN {
            thread::sleep(deadline - now - SPIN_MARGIN);
        }
        while Instant::now() < deadline {
            std::hint::spin_loop();
        }

        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        elapsed
    }

    /// Milliseconds since the clock was created.
    pub fn ticks_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

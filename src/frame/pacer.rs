use std::time::{Duration, Instant};

/// Keeps the loop at the host's target frame rate.
///
/// Call `begin()` at the top of a frame and `finish()` at the bottom; the
/// remainder of the frame budget is slept away.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u64) -> Self {
        Self {
            frame_duration: Duration::from_micros(1_000_000 / target_fps.max(1)),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the current frame's budget
    pub fn remaining(&self) -> Duration {
        self.frame_duration.saturating_sub(self.frame_start.elapsed())
    }

    pub fn finish(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_from_fps() {
        assert_eq!(FramePacer::new(60).frame_duration(), Duration::from_micros(16_666));
        assert_eq!(FramePacer::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_finish_waits_out_the_frame() {
        let mut pacer = FramePacer::new(100);
        pacer.begin();
        pacer.finish();
        assert!(pacer.remaining().is_zero());
    }
}

use std::fmt;
use std::time::{Duration, Instant};

use super::FrameTime;

/// Read-only observer of time between submits.
///
/// Keeps the last frame duration and publishes a snapshot at most once per
/// `sample_interval`, so a display does not flicker every frame.
#[derive(Debug, Clone)]
pub struct FrameStats {
    sample_interval: Duration,
    last_frame: Option<Duration>,
    published: Option<Duration>,
    last_publish: Option<Instant>,
}

/// Published frame statistics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub frame_time: Option<Duration>,
}

impl StatsSnapshot {
    /// Frame time in milliseconds.
    pub fn frame_ms(&self) -> Option<f64> {
        self.frame_time.map(|d| d.as_secs_f64() * 1000.0)
    }

    /// Frames per second, rounded up. `None` until a non-zero frame time exists.
    pub fn fps(&self) -> Option<u32> {
        let ms = self.frame_ms()?;
        if ms <= 0.0 {
            return None;
        }
        Some((1000.0 / ms).ceil() as u32)
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.fps(), self.frame_ms()) {
            (Some(fps), Some(ms)) => write!(f, "FPS: {fps}  Frame time: {ms:.1}ms"),
            _ => write!(f, "FPS: -  Frame time: -"),
        }
    }
}

impl FrameStats {
    pub fn new(sample_interval: Duration) -> Self {
        Self {
            sample_interval,
            last_frame: None,
            published: None,
            last_publish: None,
        }
    }

    /// Records a tick. Returns a snapshot when one is due.
    pub fn record(&mut self, time: &FrameTime) -> Option<StatsSnapshot> {
        // The first tick after start has no meaningful predecessor.
        if time.frame_index > 0 {
            self.last_frame = Some(time.raw_dt);
        }

        let due = match self.last_publish {
            None => true,
            Some(at) => time.now.saturating_duration_since(at) >= self.sample_interval,
        };
        if !due {
            return None;
        }

        self.last_publish = Some(time.now);
        self.published = self.last_frame;
        Some(self.snapshot())
    }

    /// Forgets the last frame time, e.g. after the loop was stopped.
    pub fn clear(&mut self) {
        self.last_frame = None;
        self.published = None;
        self.last_publish = None;
    }

    /// Returns the most recently published statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot { frame_time: self.published }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(index: u64, now: Instant, raw_ms: u64) -> FrameTime {
        FrameTime {
            dt: raw_ms as f32 / 1000.0,
            raw_dt: Duration::from_millis(raw_ms),
            elapsed: 0.0,
            now,
            frame_index: index,
        }
    }

    #[test]
    fn fps_rounds_up() {
        let s = StatsSnapshot { frame_time: Some(Duration::from_millis(16)) };
        assert_eq!(s.fps(), Some(63));
        let s = StatsSnapshot { frame_time: Some(Duration::from_millis(10)) };
        assert_eq!(s.fps(), Some(100));
    }

    #[test]
    fn unknown_frame_time_displays_placeholder() {
        let s = StatsSnapshot { frame_time: None };
        assert_eq!(s.fps(), None);
        assert_eq!(s.to_string(), "FPS: -  Frame time: -");
    }

    #[test]
    fn display_formats_one_decimal() {
        let s = StatsSnapshot { frame_time: Some(Duration::from_micros(16_666)) };
        assert_eq!(s.to_string(), "FPS: 61  Frame time: 16.7ms");
    }

    #[test]
    fn publishes_at_most_once_per_interval() {
        let mut stats = FrameStats::new(Duration::from_millis(200));
        let t0 = Instant::now();

        assert!(stats.record(&frame(0, t0, 0)).is_some());
        assert!(stats.record(&frame(1, t0 + Duration::from_millis(16), 16)).is_none());

        let snap = stats
            .record(&frame(2, t0 + Duration::from_millis(250), 20))
            .unwrap();
        assert_eq!(snap.frame_time, Some(Duration::from_millis(20)));
        assert_eq!(stats.snapshot(), snap);
    }

    #[test]
    fn first_tick_has_no_frame_time() {
        let mut stats = FrameStats::default();
        let snap = stats.record(&frame(0, Instant::now(), 5)).unwrap();
        assert_eq!(snap.frame_time, None);
    }
}

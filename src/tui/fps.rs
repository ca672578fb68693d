//! Frame-rate measurement for the status line.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of frame samples kept in the sliding window.
const SAMPLE_WINDOW: usize = 100;

/// Rolling frames-per-second counter.
///
/// Call [`record_frame`](Self::record_frame) once per rendered frame.
/// The counter keeps the frame-to-frame deltas of the most recent
/// frames and reports the latest, mean, minimum, and maximum rate over
/// that window; the mean is what the status line shows.
pub struct FpsCounter {
    /// Instant of the most recently recorded frame.
    last_frame: Instant,
    /// Durations of the most recent frames, oldest first.
    samples: VecDeque<Duration>,
}

impl FpsCounter {
    /// Create a counter with an empty sample window.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            samples: VecDeque::with_capacity(SAMPLE_WINDOW),
        }
    }

    /// Record a frame boundary.
    pub fn record_frame(&mut self) {
        let now = Instant::now();
        if self.samples.len() == SAMPLE_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(now - self.last_frame);
        self.last_frame = now;
    }

    /// Mean frames per second over the sample window.
    ///
    /// Returns 0.0 until a frame has been recorded.
    #[allow(clippy::cast_precision_loss)]
    pub fn fps(&self) -> f64 {
        let total: Duration = self.samples.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.samples.len() as f64 / total.as_secs_f64()
    }

    /// Rate of the most recent frame alone.
    pub fn latest(&self) -> f64 {
        self.samples.back().map_or(0.0, |delta| Self::rate(*delta))
    }

    /// Slowest rate in the window.
    pub fn min(&self) -> f64 {
        self.samples.iter().max().map_or(0.0, |d| Self::rate(*d))
    }

    /// Fastest rate in the window.
    pub fn max(&self) -> f64 {
        self.samples.iter().min().map_or(0.0, |d| Self::rate(*d))
    }

    /// Frames per second for a single frame delta.
    fn rate(delta: Duration) -> f64 {
        if delta.is_zero() {
            return 0.0;
        }
        1.0 / delta.as_secs_f64()
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fps_starts_at_zero() {
        let counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.latest(), 0.0);
        assert_eq!(counter.min(), 0.0);
        assert_eq!(counter.max(), 0.0);
    }

    #[test]
    fn test_fps_tracks_frame_rate() {
        let mut counter = FpsCounter::new();
        for _ in 0..5 {
            thread::sleep(Duration::from_millis(10));
            counter.record_frame();
        }

        // ~100 fps nominal; leave wide margins for scheduler noise
        let fps = counter.fps();
        assert!(fps > 10.0, "fps too low: {fps}");
        assert!(fps < 150.0, "fps too high: {fps}");
    }

    #[test]
    fn test_fps_min_max_bracket_mean() {
        let mut counter = FpsCounter::new();
        counter.samples.push_back(Duration::from_millis(10));
        counter.samples.push_back(Duration::from_millis(20));
        counter.samples.push_back(Duration::from_millis(40));

        // Deltas of 10/20/40ms: min 25 fps, max 100 fps, latest 25 fps
        assert!((counter.min() - 25.0).abs() < 1e-9);
        assert!((counter.max() - 100.0).abs() < 1e-9);
        assert!((counter.latest() - 25.0).abs() < 1e-9);

        let fps = counter.fps();
        assert!(fps >= counter.min() && fps <= counter.max());
    }

    #[test]
    fn test_fps_window_is_bounded() {
        let mut counter = FpsCounter::new();
        for _ in 0..(SAMPLE_WINDOW * 3) {
            counter.record_frame();
        }
        assert_eq!(counter.samples.len(), SAMPLE_WINDOW);
    }
}

//! Frame timing for the animation-frame scheduler
//!
//! The browser hands us a timestamp per animation frame; this clock turns
//! successive timestamps into simulation deltas. The first sample after a
//! reset only primes the clock and yields no delta, so no tick runs on a
//! frame whose elapsed time is unknown.

use crate::consts::MAX_FRAME_DT;

/// Wall-clock delta tracker for the frame loop
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current frame timestamp (milliseconds); returns the elapsed
    /// time since the previous frame in seconds, or `None` on the priming
    /// sample. Deltas are clamped to `MAX_FRAME_DT` so a long stall (tab
    /// hidden, debugger) cannot produce one giant simulation step.
    pub fn sample(&mut self, now_ms: f64) -> Option<f32> {
        let dt = self
            .last_ms
            .map(|last| (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT));
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous sample. Call on pause, resume and restart so the
    /// time spent outside `Playing` never reaches the simulation.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_primes_only() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.sample(1000.0), None);
        let dt = clock.sample(1016.0).expect("second sample yields a delta");
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_delta_clamped() {
        let mut clock = FrameClock::new();
        clock.sample(0.0);
        assert_eq!(clock.sample(5000.0), Some(MAX_FRAME_DT));
    }

    #[test]
    fn test_reset_swallows_gap() {
        let mut clock = FrameClock::new();
        clock.sample(0.0);
        clock.sample(16.0);
        clock.reset();
        // Long pause between reset and the next frame produces no delta
        assert_eq!(clock.sample(60_000.0), None);
        assert!(clock.sample(60_016.0).is_some());
    }

    #[test]
    fn test_non_monotonic_sample_yields_zero() {
        let mut clock = FrameClock::new();
        clock.sample(100.0);
        assert_eq!(clock.sample(90.0), Some(0.0));
    }
}

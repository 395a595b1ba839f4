//! Animation mapping for seeks.
//!
//! A seek maps linear time through an ease-in-out curve and then through an
//! under-damped spring, so the thumb overshoots its stop and settles on it.

use std::time::Duration;

/// Duration of an animated seek.
pub const SEEK_DURATION: Duration = Duration::from_millis(600);
/// Damping ratio of the seek spring, in `(0, 1)`.
pub const SEEK_DAMPING: f32 = 0.4;

// Natural frequency for normalized time; leaves < 2% residual at t = 1.
const SPRING_FREQUENCY: f32 = 10.0;

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub(crate) fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Under-damped spring step response over normalized time.
///
/// Starts at 0.0, overshoots 1.0 and settles; exactly 1.0 from `t >= 1`.
pub(crate) fn spring(progress: f32, damping: f32) -> f32 {
    if progress >= 1.0 {
        return 1.0;
    }
    let t = progress.max(0.0);
    let damping = damping.clamp(0.01, 0.99);
    let damped_frequency = SPRING_FREQUENCY * (1.0 - damping * damping).sqrt();
    let envelope = (-damping * SPRING_FREQUENCY * t).exp();
    1.0 - envelope
        * ((damped_frequency * t).cos()
            + damping * SPRING_FREQUENCY / damped_frequency * (damped_frequency * t).sin())
}

/// An in-flight animated seek from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekAnimation {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl SeekAnimation {
    /// Starts a seek with the default duration.
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: SEEK_DURATION,
        }
    }

    /// The value the seek settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advances the clock by `dt` and returns the displayed value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// The displayed value at the current time.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let fraction = spring(easing(progress), SEEK_DAMPING);
        self.from + (self.to - self.from) * fraction
    }

    /// Whether the seek reached its end.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

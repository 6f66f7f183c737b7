//! Named animation channels.
//!
//! A [`Channel`] is a single animated quantity (opacity, offset, scale)
//! described by where it starts, where it is going and how long it takes.
//! Nothing ticks it: callers sample it at whatever instant they render.

use std::time::Duration;
use tokio::time::Instant;

/// Easing curves used by the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    started_at: Instant,
    delay: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl Motion {
    fn settles_at(&self) -> Instant {
        self.started_at + self.delay + self.duration
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    from: f32,
    to: f32,
    motion: Option<Motion>,
}

impl Channel {
    /// A channel resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            motion: None,
        }
    }

    pub fn animate_to(
        &mut self,
        target: f32,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) {
        self.animate_to_after(target, Duration::ZERO, duration, easing, now);
    }

    /// Retarget from the currently sampled value, holding it for `delay`
    /// before moving.
    pub fn animate_to_after(
        &mut self,
        target: f32,
        delay: Duration,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) {
        self.from = self.sample(now);
        self.to = target;
        self.motion = if delay.is_zero() && duration.is_zero() {
            None
        } else {
            Some(Motion {
                started_at: now,
                delay,
                duration,
                easing,
            })
        };
    }

    /// Jump to `value` with no animation.
    pub fn set(&mut self, value: f32) {
        *self = Self::new(value);
    }

    pub fn sample(&self, now: Instant) -> f32 {
        let Some(motion) = self.motion else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(motion.started_at);
        if elapsed < motion.delay {
            return self.from;
        }
        let running = elapsed - motion.delay;
        if motion.duration.is_zero() || running >= motion.duration {
            return self.to;
        }
        let t = running.as_secs_f32() / motion.duration.as_secs_f32();
        self.from + (self.to - self.from) * motion.easing.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// When the current motion reaches its target; `None` when resting.
    pub fn settles_at(&self) -> Option<Instant> {
        self.motion.map(|motion| motion.settles_at())
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.settles_at().is_none_or(|at| now >= at)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.settles_at()
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or_default()
    }
}

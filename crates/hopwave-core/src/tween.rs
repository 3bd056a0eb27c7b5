use std::time::Duration;

/// How many times a [`Tween`] plays its cycle after the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Forever,
}

/// A linearly interpolated value over evenly spaced keyframes.
///
/// Nothing moves on its own: the owner calls [`Tween::advance`] once per frame
/// with the time since the previous frame and reads [`Tween::value`] back.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    keyframes: Vec<f64>,
    duration: Duration,
    repeat: Repeat,
    elapsed: Duration,
    cycle: u32,
    value: f64,
    active: bool,
}

impl Tween {
    /// Panics if fewer than two keyframes are given.
    pub fn new(keyframes: Vec<f64>, duration: Duration, repeat: Repeat) -> Self {
        assert!(keyframes.len() >= 2, "a tween needs at least two keyframes");
        let value = keyframes[0];
        Self {
            keyframes,
            duration,
            repeat,
            elapsed: Duration::ZERO,
            cycle: 0,
            value,
            active: false,
        }
    }

    /// One-shot tween from `from` to `to`.
    pub fn between(from: f64, to: f64, duration: Duration) -> Self {
        Self::new(vec![from, to], duration, Repeat::Never)
    }

    /// An inactive placeholder that never produces anything but `value`.
    pub fn idle(value: f64) -> Self {
        Self::between(value, value, Duration::ZERO)
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.cycle = 0;
        self.value = self.keyframes[0];
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Swaps the keyframes while keeping the tween's progress through its cycle.
    pub fn retarget(&mut self, keyframes: Vec<f64>) {
        assert!(keyframes.len() >= 2, "a tween needs at least two keyframes");
        self.keyframes = keyframes;
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.value = self.sample(fraction);
    }

    /// Moves the tween forward by `dt`. Returns `false` once it has finished
    /// (the final keyframe is then the value) or if it was never started.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.active {
            return false;
        }

        if self.duration.is_zero() {
            return self.finish_or_hold();
        }

        self.elapsed += dt;
        while self.elapsed >= self.duration {
            if !self.has_cycles_left() {
                return self.finish_or_hold();
            }
            self.elapsed -= self.duration;
            self.cycle = self.cycle.saturating_add(1);
        }

        self.value = self.sample(self.elapsed.as_secs_f64() / self.duration.as_secs_f64());
        true
    }

    fn has_cycles_left(&self) -> bool {
        match self.repeat {
            Repeat::Never => false,
            Repeat::Times(n) => self.cycle < n,
            Repeat::Forever => true,
        }
    }

    fn finish_or_hold(&mut self) -> bool {
        self.value = self.last();
        if self.repeat == Repeat::Forever {
            return true;
        }
        self.elapsed = self.duration;
        self.active = false;
        false
    }

    fn last(&self) -> f64 {
        self.keyframes[self.keyframes.len() - 1]
    }

    /// Value at `fraction` (0..=1) of a cycle.
    fn sample(&self, fraction: f64) -> f64 {
        let segments = self.keyframes.len() - 1;
        let position = fraction.clamp(0.0, 1.0) * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local = position - index as f64;
        let (from, to) = (self.keyframes[index], self.keyframes[index + 1]);
        from + (to - from) * local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_not_started_does_nothing() {
        let mut tween = Tween::between(0.0, 100.0, ms(800));
        assert!(!tween.is_active());
        assert!(!tween.advance(ms(100)));
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_linear_progress_and_completion() {
        let mut tween = Tween::between(10.0, 90.0, ms(800));
        tween.start();

        assert!(tween.advance(ms(200)));
        assert!((tween.value() - 30.0).abs() < EPSILON);
        assert!(tween.advance(ms(400)));
        assert!((tween.value() - 70.0).abs() < EPSILON);

        assert!(!tween.advance(ms(400)));
        assert_eq!(tween.value(), 90.0);
        assert!(!tween.is_active());
    }

    #[test]
    fn test_keyframes_are_evenly_spaced() {
        let mut tween = Tween::new(vec![200.0, 40.0, 200.0], ms(1000), Repeat::Never);
        tween.start();

        tween.advance(ms(250));
        assert!((tween.value() - 120.0).abs() < EPSILON);
        tween.advance(ms(250));
        assert!((tween.value() - 40.0).abs() < EPSILON);
        tween.advance(ms(250));
        assert!((tween.value() - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_repeat_forever_wraps() {
        let mut tween = Tween::new(vec![0.0, 100.0], ms(1000), Repeat::Forever);
        tween.start();

        for _ in 0..10 {
            assert!(tween.advance(ms(1000)));
        }
        assert!(tween.advance(ms(250)));
        assert!((tween.value() - 25.0).abs() < EPSILON);
        assert!(tween.is_active());
    }

    #[test]
    fn test_repeat_times() {
        let mut tween = Tween::new(vec![0.0, 100.0], ms(100), Repeat::Times(2));
        tween.start();

        assert!(tween.advance(ms(150)));
        assert!(tween.advance(ms(100)));
        assert!(!tween.advance(ms(100)));
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut tween = Tween::between(0.0, 100.0, ms(100));
        tween.start();
        tween.advance(ms(50));
        tween.cancel();
        assert!(!tween.is_active());
        assert!(!tween.advance(ms(10)));
        assert!((tween.value() - 50.0).abs() < EPSILON);

        tween.start();
        assert_eq!(tween.value(), 0.0);
        assert!(tween.is_active());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::between(3.0, 7.0, Duration::ZERO);
        tween.start();
        assert!(!tween.advance(ms(16)));
        assert_eq!(tween.value(), 7.0);
    }

    #[test]
    fn test_retarget_keeps_progress() {
        let mut idle = Tween::between(0.0, 100.0, ms(800));
        idle.retarget(vec![50.0, 150.0]);
        assert_eq!(idle.value(), 50.0);

        let mut moving = Tween::between(0.0, 100.0, ms(800));
        moving.start();
        moving.advance(ms(200));
        moving.retarget(vec![100.0, 300.0]);
        assert!((moving.value() - 150.0).abs() < EPSILON);
        assert!(moving.is_active());
        assert!(!moving.advance(ms(600)));
        assert_eq!(moving.value(), 300.0);

        let mut finished = Tween::between(0.0, 100.0, ms(800));
        finished.start();
        finished.advance(ms(800));
        finished.retarget(vec![0.0, 40.0]);
        assert_eq!(finished.value(), 40.0);
    }
}

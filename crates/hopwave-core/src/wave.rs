use crate::color::Color;
use crate::config::IndicatorConfig;
use crate::geometry::{Point, Size, column_centers};
use crate::indicator::Indicator;
use crate::measure;
use crate::snapshot::{GeometrySnapshot, Shape};
use crate::tween::{Repeat, Tween};
use std::time::Duration;

/// One full rise and fall of a dot.
pub const CYCLE_DURATION: Duration = Duration::from_millis(1000);
/// How far a dot must rise before the next one starts moving.
pub const CASCADE_THRESHOLD: f64 = 30.0;
/// The resting line sits this far below the vertical middle.
pub const REST_LINE_OFFSET: f64 = 80.0;
pub const MIN_DOTS: usize = 1;

#[derive(Debug, Clone)]
pub struct Dot {
    pub x: f64,
    /// `None` while resting.
    pub y: Option<f64>,
    pub color: Color,
    tween: Tween,
}

impl Dot {
    fn new(color: Color) -> Self {
        Self {
            x: 0.0,
            y: None,
            color,
            tween: Tween::idle(0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.tween.is_active()
    }
}

/// A row of dots bouncing one after the other.
#[derive(Debug, Clone)]
pub struct WaveIndicator {
    dots: Vec<Dot>,
    radius: f64,
    wave_height: f64,
    size: Size,
    preferred: Size,
    resting_y: f64,
    started: bool,
    running: bool,
    repaint: bool,
}

impl WaveIndicator {
    pub fn new(config: &IndicatorConfig) -> Self {
        let count = if config.circle_count < MIN_DOTS {
            log::warn!(
                "wave indicator needs at least {} dot, got {}",
                MIN_DOTS,
                config.circle_count
            );
            MIN_DOTS
        } else {
            config.circle_count
        };

        Self {
            dots: (0..count).map(|i| Dot::new(config.color(i))).collect(),
            radius: config.radius,
            wave_height: config.wave_height,
            size: Size::default(),
            preferred: config.measure(measure::wave_size(
                config.radius,
                count,
                config.wave_height,
            )),
            resting_y: REST_LINE_OFFSET,
            started: false,
            running: false,
            repaint: false,
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn resting_y(&self) -> f64 {
        self.resting_y
    }

    /// Where dot `index` is drawn this frame.
    pub fn dot_y(&self, index: usize) -> f64 {
        self.dots[index].y.unwrap_or(self.resting_y)
    }

    fn advance_dots(&mut self, dt: Duration) {
        let threshold = self.resting_y - CASCADE_THRESHOLD;
        let last = self.dots.len() - 1;
        // dots started during this frame wait for the next one
        let active: Vec<bool> = self.dots.iter().map(Dot::is_active).collect();
        let mut cascade = Vec::new();

        for (i, dot) in self.dots.iter_mut().enumerate() {
            if !active[i] {
                continue;
            }
            dot.tween.advance(dt);
            let y = dot.tween.value();
            dot.y = Some(y);

            let next = (i + 1).min(last);
            if !active[next] && y <= threshold {
                cascade.push(next);
            }
        }

        for next in cascade {
            log::trace!("wave dot {} joined", next);
            self.dots[next].tween.start();
        }

        if active.contains(&true) {
            self.repaint = true;
        }
    }

    fn layout(&mut self) {
        let resting_y = self.size.height / 2.0 + REST_LINE_OFFSET;
        if self.running && resting_y != self.resting_y {
            self.retarget(resting_y);
        }
        self.resting_y = resting_y;
        let count = self.dots.len();
        for (dot, x) in self.dots.iter_mut().zip(column_centers(self.size.width, count)) {
            dot.x = x;
        }
    }

    fn snapshot(&self) -> GeometrySnapshot {
        let mut snapshot = GeometrySnapshot::default();
        for dot in &self.dots {
            snapshot.push(Shape::Circle {
                center: Point::new(dot.x, dot.y.unwrap_or(self.resting_y)),
                radius: self.radius,
                color: dot.color,
            });
        }
        snapshot
    }

    fn keyframes(&self, rest: f64) -> Vec<f64> {
        vec![rest, rest - self.wave_height, rest]
    }

    /// Moves every bounce onto a new resting line without restarting it.
    fn retarget(&mut self, rest: f64) {
        let keyframes = self.keyframes(rest);
        for dot in &mut self.dots {
            dot.tween.retarget(keyframes.clone());
            if dot.y.is_some() {
                dot.y = Some(dot.tween.value());
            }
        }
    }

    fn init_tweens(&mut self) {
        let rest = self.resting_y;
        let keyframes = self.keyframes(rest);
        for dot in &mut self.dots {
            dot.y = Some(rest);
            dot.tween = Tween::new(keyframes.clone(), CYCLE_DURATION, Repeat::Forever);
        }
        if let Some(first) = self.dots.first_mut() {
            first.tween.start();
        }
    }
}

impl Indicator for WaveIndicator {
    fn start(&mut self) {
        if !self.started {
            self.started = true;
            self.repaint = true;
            log::debug!("wave indicator started");
        }
    }

    fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        self.running = false;
        for dot in &mut self.dots {
            dot.tween.cancel();
            dot.y = None;
        }
        self.repaint = true;
        log::debug!("wave indicator stopped");
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_bounds(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.repaint = true;
        }
    }

    fn tick(&mut self, dt: Duration) -> GeometrySnapshot {
        self.advance_dots(dt);
        self.layout();
        let snapshot = self.snapshot();
        if self.started && !self.running {
            self.init_tweens();
            self.running = true;
        }
        snapshot
    }

    fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }
}

use crate::color::Color;
use crate::config::IndicatorConfig;
use crate::geometry::{Edge, Point, Rect, Size, column_centers};
use crate::indicator::Indicator;
use crate::measure;
use crate::snapshot::{GeometrySnapshot, Shape};
use crate::tween::Tween;
use std::time::Duration;

/// Length of each of the two phases of a hop.
pub const PHASE_DURATION: Duration = Duration::from_millis(800);
pub const MIN_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// The edge that moves first when hopping this way.
    fn leading_edge(self) -> Edge {
        match self {
            Self::Forward => Edge::Right,
            Self::Reverse => Edge::Left,
        }
    }

    fn trailing_edge(self) -> Edge {
        match self {
            Self::Forward => Edge::Left,
            Self::Reverse => Edge::Right,
        }
    }
}

/// The slot being animated and the neighbour it hops to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub next: usize,
    pub direction: Direction,
}

impl Cursor {
    pub fn forward_start() -> Self {
        Self {
            index: 0,
            next: 1,
            direction: Direction::Forward,
        }
    }

    pub fn reverse_start(count: usize) -> Self {
        Self {
            index: count - 1,
            next: count - 2,
            direction: Direction::Reverse,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub center: Point,
    pub bounds: Rect,
    pub visited: bool,
    pub completed: bool,
    pub color: Color,
}

impl Slot {
    fn new(color: Color) -> Self {
        Self {
            center: Point::default(),
            bounds: Rect::default(),
            visited: false,
            completed: false,
            color,
        }
    }

    fn rest(&mut self, radius: f64) {
        self.bounds = Rect::around(self.center, radius);
    }
}

/// A highlight that hops across a row of slots, left to right and back.
///
/// Each hop has two phases. The leading edge of the highlight stretches into
/// the next slot, then the trailing edge follows it. Slots are marked visited
/// as the highlight leaves them on the way forward. Reaching either end of
/// the row flips the direction and clears every mark.
#[derive(Debug, Clone)]
pub struct SegmentedHopIndicator {
    slots: Vec<Slot>,
    radius: f64,
    size: Size,
    preferred: Size,
    cursor: Cursor,
    front: Tween,
    back: Tween,
    started: bool,
    running: bool,
    resized: bool,
    repaint: bool,
}

impl SegmentedHopIndicator {
    pub fn new(config: &IndicatorConfig) -> Self {
        let count = if config.circle_count < MIN_SLOTS {
            log::warn!(
                "segmented indicator needs at least {} slots, got {}",
                MIN_SLOTS,
                config.circle_count
            );
            MIN_SLOTS
        } else {
            config.circle_count
        };

        Self {
            slots: (0..count).map(|i| Slot::new(config.color(i))).collect(),
            radius: config.radius,
            size: Size::default(),
            preferred: config.measure(measure::segmented_size(config.radius, count)),
            cursor: Cursor::forward_start(),
            front: Tween::idle(0.0),
            back: Tween::idle(0.0),
            started: false,
            running: false,
            resized: false,
            repaint: false,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// True while either phase of a hop is still moving.
    pub fn is_hopping(&self) -> bool {
        self.front.is_active() || self.back.is_active()
    }

    fn advance_phases(&mut self, dt: Duration) {
        let Cursor {
            index, direction, ..
        } = self.cursor;

        if self.front.is_active() {
            let moving = self.front.advance(dt);
            self.slots[index]
                .bounds
                .set_edge(direction.leading_edge(), self.front.value());
            self.repaint = true;
            if !moving {
                self.slots[index].visited = direction == Direction::Forward;
                self.back.start();
            }
        } else if self.back.is_active() {
            let moving = self.back.advance(dt);
            self.slots[index]
                .bounds
                .set_edge(direction.trailing_edge(), self.back.value());
            self.repaint = true;
            if !moving {
                self.slots[index].completed = true;
            }
        }
    }

    fn layout(&mut self) {
        let center_y = self.size.height / 2.0;
        let count = self.slots.len();
        for (slot, x) in self.slots.iter_mut().zip(column_centers(self.size.width, count)) {
            slot.center = Point::new(x, center_y);
            if !self.running {
                slot.rest(self.radius);
            }
        }
        if std::mem::take(&mut self.resized) && self.running {
            self.reanchor();
        }
    }

    /// Moves the hop in flight onto the current layout, keeping its progress.
    fn reanchor(&mut self) {
        let Cursor {
            index,
            next,
            direction,
        } = self.cursor;
        let from = Rect::around(self.slots[index].center, self.radius);
        let to = Rect::around(self.slots[next].center, self.radius);
        let (leading, trailing) = (direction.leading_edge(), direction.trailing_edge());

        self.front.retarget(vec![from.edge(leading), to.edge(leading)]);
        self.back.retarget(vec![from.edge(trailing), to.edge(trailing)]);

        let mut bounds = from;
        bounds.set_edge(leading, self.front.value());
        bounds.set_edge(trailing, self.back.value());
        self.slots[index].bounds = bounds;
    }

    fn snapshot(&self) -> GeometrySnapshot {
        let mut snapshot = GeometrySnapshot::default();

        // parked on slot 0 until the first hop begins
        let highlighted = if self.running {
            &self.slots[self.cursor.index]
        } else {
            &self.slots[0]
        };
        snapshot.push(Shape::RoundedRect {
            rect: highlighted.bounds,
            corner_radius: self.radius,
            color: highlighted.color,
        });

        for slot in self.slots.iter().filter(|slot| slot.visited) {
            snapshot.push(Shape::Circle {
                center: slot.center,
                radius: self.radius,
                color: slot.color,
            });
        }
        snapshot
    }

    fn step(&mut self) {
        if !self.started {
            return;
        }

        if !self.running {
            self.hop();
            self.running = true;
            return;
        }

        if self.slots[self.cursor.index].completed {
            self.advance_cursor();
        }
        self.hop();
    }

    fn advance_cursor(&mut self) {
        match self.cursor.direction {
            Direction::Forward => {
                self.cursor.index += 1;
                self.cursor.next = self.cursor.index + 1;
                if self.cursor.next >= self.slots.len() {
                    self.flip(Direction::Reverse);
                }
            }
            Direction::Reverse => {
                self.cursor.index = self.cursor.index.saturating_sub(1);
                match self.cursor.index.checked_sub(1) {
                    Some(next) => self.cursor.next = next,
                    None => self.flip(Direction::Forward),
                }
            }
        }
    }

    fn flip(&mut self, direction: Direction) {
        self.cursor = match direction {
            Direction::Forward => Cursor::forward_start(),
            Direction::Reverse => Cursor::reverse_start(self.slots.len()),
        };
        // visited marks are cleared here too, while still started
        self.reset_slots();
        log::debug!("segmented indicator turned {:?}", direction);
    }

    fn reset_slots(&mut self) {
        for slot in &mut self.slots {
            slot.rest(self.radius);
            slot.completed = false;
            slot.visited = false;
        }
    }

    /// Starts both phases for the current slot unless a hop is in flight.
    fn hop(&mut self) {
        if self.is_hopping() {
            return;
        }

        let Cursor {
            index,
            next,
            direction,
        } = self.cursor;
        let from = Rect::around(self.slots[index].center, self.radius);
        let to = Rect::around(self.slots[next].center, self.radius);
        let (leading, trailing) = (direction.leading_edge(), direction.trailing_edge());

        self.slots[index].bounds = from;
        self.front = Tween::between(from.edge(leading), to.edge(leading), PHASE_DURATION);
        self.back = Tween::between(from.edge(trailing), to.edge(trailing), PHASE_DURATION);
        self.front.start();
        log::trace!("hop {} -> {} ({:?})", index, next, direction);
    }
}

impl Indicator for SegmentedHopIndicator {
    fn start(&mut self) {
        if !self.started {
            self.started = true;
            self.repaint = true;
            log::debug!("segmented indicator started");
        }
    }

    fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        self.running = false;
        self.cursor = Cursor::forward_start();
        self.front.cancel();
        self.back.cancel();
        self.reset_slots();
        self.repaint = true;
        log::debug!("segmented indicator stopped");
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
            self.resized = true;
            self.repaint = true;
        }
    }

    fn tick(&mut self, dt: Duration) -> GeometrySnapshot {
        self.advance_phases(dt);
        self.layout();
        let snapshot = self.snapshot();
        self.step();
        snapshot
    }

    fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }
}

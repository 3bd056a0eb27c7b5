use super::view;
use gtk::prelude::*;
use gtk4 as gtk;
use hopwave_core::{GeometrySnapshot, Indicator, Size};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct AreaState {
    indicator: Box<dyn Indicator>,
    snapshot: GeometrySnapshot,
    last_frame_time: Option<i64>,
}

impl AreaState {
    /// Runs one frame. `frame_time` is the frame clock's time in microseconds.
    fn frame(&mut self, frame_time: i64, size: Size) -> bool {
        let dt = self
            .last_frame_time
            .map(|last| Duration::from_micros(frame_time.saturating_sub(last).max(0) as u64))
            .unwrap_or_default();
        self.last_frame_time = Some(frame_time);

        self.indicator.set_bounds(size);
        self.snapshot = self.indicator.tick(dt);
        self.indicator.take_repaint_request()
    }
}

/// A drawing area that ticks an indicator on every frame of its frame clock.
pub struct IndicatorArea {
    widget: gtk::DrawingArea,
    state: Rc<RefCell<AreaState>>,
}

impl IndicatorArea {
    pub fn new(indicator: Box<dyn Indicator>) -> Self {
        let widget = gtk::DrawingArea::new();
        widget.add_css_class("hopwave-indicator");
        widget.set_halign(gtk::Align::Center);

        let area = Self {
            widget,
            state: Rc::new(RefCell::new(AreaState {
                indicator,
                snapshot: GeometrySnapshot::default(),
                last_frame_time: None,
            })),
        };
        area.apply_preferred_size();
        area.connect();
        area
    }

    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.widget
    }

    fn connect(&self) {
        let state = self.state.clone();
        self.widget.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &state.borrow().snapshot) {
                log::error!("Drawing error: {}", e);
            }
        });

        let state = self.state.clone();
        self.widget.add_tick_callback(move |widget, clock| {
            let size = Size::new(widget.width() as f64, widget.height() as f64);
            if state.borrow_mut().frame(clock.frame_time(), size) {
                widget.queue_draw();
            }
            glib::ControlFlow::Continue
        });
    }

    fn apply_preferred_size(&self) {
        let size = self.state.borrow().indicator.preferred_size();
        self.widget.set_content_width(size.width.round() as i32);
        self.widget.set_content_height(size.height.round() as i32);
    }

    pub fn start(&self) {
        self.state.borrow_mut().indicator.start();
    }

    pub fn stop(&self) {
        self.state.borrow_mut().indicator.stop();
    }

    pub fn toggle(&self) {
        let mut state = self.state.borrow_mut();
        if state.indicator.is_started() {
            state.indicator.stop();
        } else {
            state.indicator.start();
        }
    }

    pub fn is_started(&self) -> bool {
        self.state.borrow().indicator.is_started()
    }

    /// Swaps in a rebuilt indicator, carrying over whether it was started.
    pub fn replace(&self, mut indicator: Box<dyn Indicator>) {
        {
            let mut state = self.state.borrow_mut();
            if state.indicator.is_started() {
                indicator.start();
            }
            state.indicator = indicator;
        }
        self.apply_preferred_size();
        self.widget.queue_draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopwave_core::{IndicatorConfig, WaveIndicator};

    fn state() -> AreaState {
        AreaState {
            indicator: Box::new(WaveIndicator::new(&IndicatorConfig::default())),
            snapshot: GeometrySnapshot::default(),
            last_frame_time: None,
        }
    }

    #[test]
    fn test_idle_frames_do_not_repaint() {
        let mut state = state();
        let size = Size::new(200.0, 400.0);

        // the first frame delivers the size
        assert!(state.frame(1_000_000, size));
        assert!(!state.frame(1_016_000, size));
        assert!(state.frame(1_032_000, Size::new(300.0, 400.0)));
    }

    #[test]
    fn test_frame_clock_drives_the_indicator() {
        let mut state = state();
        state.indicator.start();
        let size = Size::new(200.0, 400.0);

        assert!(state.frame(1_000_000, size));
        // half a cycle later the first dot is at its peak
        assert!(state.frame(1_500_000, size));
        let (center, _) = state.snapshot.circles().next().unwrap();
        assert_eq!(center.y, 120.0);
    }
}

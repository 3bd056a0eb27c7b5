use crate::geometry::Size;
use crate::snapshot::GeometrySnapshot;
use std::time::Duration;

/// A progress indicator driven one frame at a time by its host.
///
/// The host feeds the measured size through [`Indicator::set_bounds`], calls
/// [`Indicator::tick`] once per frame and paints the returned snapshot. It
/// only needs to schedule a redraw when [`Indicator::take_repaint_request`]
/// says so.
pub trait Indicator {
    /// No-op when already started.
    fn start(&mut self);

    /// No-op when not started.
    fn stop(&mut self);

    fn is_started(&self) -> bool;

    /// True once the first animation cycle has begun, which is one frame
    /// after [`Indicator::start`].
    fn is_running(&self) -> bool;

    fn set_bounds(&mut self, size: Size);

    fn tick(&mut self, dt: Duration) -> GeometrySnapshot;

    /// Returns whether a repaint was requested since the last call.
    fn take_repaint_request(&mut self) -> bool;

    fn preferred_size(&self) -> Size;
}

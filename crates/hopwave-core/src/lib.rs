//! Frame-driven state machines for two progress indicators.
//!
//! Nothing here draws. Each indicator turns elapsed time into a
//! [`GeometrySnapshot`] that a host paints however it likes.

pub mod color;
pub mod config;
pub mod geometry;
pub mod indicator;
pub mod measure;
pub mod segmented;
pub mod snapshot;
pub mod tween;
pub mod wave;

pub use color::{Color, ColorParseError};
pub use config::IndicatorConfig;
pub use geometry::{Point, Rect, Size};
pub use indicator::Indicator;
pub use segmented::SegmentedHopIndicator;
pub use snapshot::{GeometrySnapshot, Shape};
pub use tween::{Repeat, Tween};
pub use wave::WaveIndicator;

pub mod area;
pub mod view;

pub use area::IndicatorArea;

pub mod app;
pub mod indicator;
pub mod theme;

pub mod app;
pub mod input;
pub mod input_collector;
pub mod render;
pub mod screen;
pub mod text_field;
pub mod theme;

pub use app::run;

mod common;
mod controls;
mod display;
mod keypad;
mod main;
pub mod vertical_slider;

pub use vertical_slider::VerticalSlider;

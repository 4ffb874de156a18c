pub mod actions;
pub mod state;

pub use state::*;

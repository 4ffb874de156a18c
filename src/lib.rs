//! kanapad: an on-screen Japanese kana input panel.
//!
//! The UI lives in [`ui`]; everything it edits is plain state in [`app`],
//! [`composer`] and [`slider`], which carry no egui types beyond geometry.

pub mod app;
pub mod composer;
pub mod errors;
pub mod fonts;
pub mod kana;
pub mod layout;
pub mod logging;
pub mod settings;
pub mod slider;
pub mod ui;

#[cfg(test)]
mod tests;

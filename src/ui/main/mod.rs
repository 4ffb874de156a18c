// Submodules for the main window
pub mod keyboard_input;
pub mod main_ui;
pub mod statusbar;
pub mod theme;

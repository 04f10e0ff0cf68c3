pub mod core;
pub mod input;
pub mod physics;
pub mod control;
pub mod debug_ui;

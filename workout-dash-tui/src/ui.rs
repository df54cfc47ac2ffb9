// workout-dash-tui/src/ui.rs
mod layout;
pub mod menu;
mod modals;
mod status_bar;

// Re-export the main render function
pub use layout::render_ui;

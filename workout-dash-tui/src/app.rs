// workout-dash-tui/src/app.rs
mod actions;
mod data;
mod input;
mod modals;
mod navigation;
mod state;

pub use state::{ActiveModal, ActiveView, AddWorkoutField, App, Notice, NoticeKind};

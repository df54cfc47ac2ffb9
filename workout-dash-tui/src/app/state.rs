// workout-dash-tui/src/app/state.rs
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use workout_dash_lib::{AppService, WorkoutClient};

const NOTICE_DISPLAY_SECS: u64 = 5;

// Which view is on screen. Opening a workout pushes its detail view;
// Esc pops back to the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Workouts,
    WorkoutDetail { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddWorkoutField {
    Name,
    Exercises,
    Confirm,
    Cancel,
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    AddWorkout {
        name_input: String,
        exercises_input: String, // Comma-separated list
        focused_field: AddWorkoutField,
        error_message: Option<String>,
    },
    ConfirmDeleteWorkout {
        workout_id: String,
        workout_name: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing message shown in the status bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

// Holds the application state
pub struct App {
    pub service: AppService<WorkoutClient>,
    pub active_view: ActiveView,
    pub should_quit: bool,
    pub active_modal: ActiveModal,

    /// True only while the initial snapshot (or an explicit reload) is
    /// outstanding; single mutations never toggle it.
    pub is_loading: bool,
    /// Set when the next loop iteration should run a full refresh.
    pub needs_reload: bool,

    pub notice: Option<Notice>,
    pub notice_clear_time: Option<Instant>,

    pub workout_list_state: ListState,
    pub exercise_list_state: ListState,
}

impl App {
    pub fn new(service: AppService<WorkoutClient>) -> Self {
        let mut app = App {
            service,
            active_view: ActiveView::Workouts,
            should_quit: false,
            active_modal: ActiveModal::None,
            is_loading: true,
            needs_reload: true,
            notice: None,
            notice_clear_time: None,
            workout_list_state: ListState::default(),
            exercise_list_state: ListState::default(),
        };
        app.workout_list_state.select(Some(0));
        // Initial data load happens in the main loop, after the first draw
        app
    }

    pub fn notify_success(&mut self, description: impl Into<String>) {
        self.set_notice(Notice {
            title: "Success".to_string(),
            description: description.into(),
            kind: NoticeKind::Success,
        });
    }

    pub fn notify_error(&mut self, description: impl Into<String>) {
        self.set_notice(Notice {
            title: "Error".to_string(),
            description: description.into(),
            kind: NoticeKind::Error,
        });
    }

    fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_clear_time = Some(Instant::now() + Duration::from_secs(NOTICE_DISPLAY_SECS));
    }

    // Called each loop iteration before drawing
    pub fn clear_expired_notice(&mut self) {
        if let Some(clear_time) = self.notice_clear_time {
            if Instant::now() >= clear_time {
                self.notice = None;
                self.notice_clear_time = None;
            }
        }
    }
}

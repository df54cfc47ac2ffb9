// workout-dash-tui/src/app/data.rs
use super::navigation::ensure_selection_is_valid;
use super::state::{ActiveView, App};
use tracing::error;

impl App {
    /// Runs the refresh queued by `needs_reload`. The loading indicator is
    /// cleared whether the fetch succeeds or fails; on failure the prior
    /// snapshot stays on screen and only a notice is raised.
    pub fn run_pending_reload(&mut self) {
        match self.service.refresh() {
            Ok(()) => {
                ensure_selection_is_valid(
                    &mut self.workout_list_state,
                    self.service.workouts.len(),
                );
                self.reconcile_detail_view();
            }
            Err(e) => {
                error!("Error fetching workouts: {:#}", e);
                self.notify_error("Failed to fetch workouts");
            }
        }
        self.needs_reload = false;
        self.is_loading = false;
    }

    /// Queues a reload without the loading indicator (used after mutations
    /// and for manual refresh; only the initial load shows the spinner).
    pub fn request_reload(&mut self) {
        self.needs_reload = true;
    }

    // A refresh can drop the workout an open detail view points at.
    fn reconcile_detail_view(&mut self) {
        let detail_len = match &self.active_view {
            ActiveView::WorkoutDetail { name } => {
                self.service.exercises_for(name).map(<[String]>::len)
            }
            ActiveView::Workouts => return,
        };
        match detail_len {
            Some(len) => ensure_selection_is_valid(&mut self.exercise_list_state, len),
            None => self.active_view = ActiveView::Workouts,
        }
    }
}

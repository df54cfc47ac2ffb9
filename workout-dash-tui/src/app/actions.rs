// workout-dash-tui/src/app/actions.rs
use super::navigation::ensure_selection_is_valid;
use super::state::{ActiveModal, ActiveView, AddWorkoutField, App};
use crate::ui::menu::MenuIntent;
use tracing::error;

impl App {
    /// Applies an intent emitted by the menu widget.
    pub(crate) fn apply_menu_intent(&mut self, intent: MenuIntent) {
        match intent {
            MenuIntent::Open(name) => self.open_workout_detail(name),
            MenuIntent::DeleteWorkout { id, name } => {
                // Destructive, so ask first; the actual call runs from the
                // confirmation modal.
                self.active_modal = ActiveModal::ConfirmDeleteWorkout {
                    workout_id: id,
                    workout_name: name,
                };
            }
            MenuIntent::DeleteExercise { workout, exercise } => {
                self.submit_remove_exercise(&workout, &exercise);
            }
        }
    }

    fn open_workout_detail(&mut self, name: String) {
        let Some(exercises) = self.service.exercises_for(&name) else {
            return;
        };
        self.exercise_list_state.select(if exercises.is_empty() {
            None
        } else {
            Some(0)
        });
        self.active_view = ActiveView::WorkoutDetail { name };
    }

    pub(crate) fn open_add_workout_modal(&mut self) {
        self.active_modal = ActiveModal::AddWorkout {
            name_input: String::new(),
            exercises_input: String::new(),
            focused_field: AddWorkoutField::Name,
            error_message: None,
        };
    }

    pub(crate) fn submit_delete_workout(&mut self, workout_id: &str, workout_name: &str) {
        match self.service.delete_workout(workout_id, workout_name) {
            Ok(()) => {
                ensure_selection_is_valid(
                    &mut self.workout_list_state,
                    self.service.workouts.len(),
                );
                if matches!(&self.active_view, ActiveView::WorkoutDetail { name } if name == workout_name)
                {
                    self.active_view = ActiveView::Workouts;
                }
                self.notify_success(format!("Workout \"{workout_name}\" deleted successfully"));
            }
            Err(e) => {
                error!("Error deleting workout: {:#}", e);
                self.notify_error("Failed to delete workout");
            }
        }
    }

    pub(crate) fn submit_remove_exercise(&mut self, workout_name: &str, exercise: &str) {
        match self.service.remove_exercise(workout_name, exercise) {
            Ok(()) => {
                let remaining = self
                    .service
                    .exercises_for(workout_name)
                    .map_or(0, <[String]>::len);
                ensure_selection_is_valid(&mut self.exercise_list_state, remaining);
                self.notify_success(format!(
                    "Exercise \"{exercise}\" removed from \"{workout_name}\""
                ));
            }
            Err(e) => {
                error!("Error removing exercise: {:#}", e);
                self.notify_error("Failed to remove exercise");
            }
        }
    }
}

// workout-dash-tui/src/app/input.rs
use super::modals::{handle_add_workout_modal_input, handle_confirm_delete_modal_input};
use super::navigation::{list_next, list_previous};
use super::state::{ActiveModal, ActiveView, App};
use crate::ui::menu::{self, MenuMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            _ => match self.active_view.clone() {
                ActiveView::Workouts => self.handle_workouts_input(key),
                ActiveView::WorkoutDetail { name } => self.handle_detail_input(key, &name),
            },
        }
        Ok(())
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => self.handle_help_modal_input(key),
            ActiveModal::AddWorkout { .. } => handle_add_workout_modal_input(self, key)?,
            ActiveModal::ConfirmDeleteWorkout { .. } => {
                handle_confirm_delete_modal_input(self, key)?;
            }
            ActiveModal::None => {}
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }

    // --- View-Specific Input Handling ---
    fn handle_workouts_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                list_previous(&mut self.workout_list_state, self.service.workouts.len());
            }
            KeyCode::Char('j') | KeyCode::Down => {
                list_next(&mut self.workout_list_state, self.service.workouts.len());
            }
            KeyCode::Char('a') => self.open_add_workout_modal(),
            KeyCode::Char('r') => self.request_reload(),
            _ => {
                let intent = {
                    let mode = MenuMode::Workouts(&self.service.workouts);
                    menu::intent_for_key(key, &mode, self.workout_list_state.selected())
                };
                if let Some(intent) = intent {
                    self.apply_menu_intent(intent);
                }
            }
        }
    }

    fn handle_detail_input(&mut self, key: KeyEvent, workout_name: &str) {
        let exercise_count = self
            .service
            .exercises_for(workout_name)
            .map_or(0, <[String]>::len);

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                self.active_view = ActiveView::Workouts;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                list_previous(&mut self.exercise_list_state, exercise_count);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                list_next(&mut self.exercise_list_state, exercise_count);
            }
            _ => {
                let intent = match self.service.exercises_for(workout_name) {
                    Some(exercises) => {
                        let mode = MenuMode::Exercises {
                            workout: workout_name,
                            exercises,
                        };
                        menu::intent_for_key(key, &mode, self.exercise_list_state.selected())
                    }
                    None => None,
                };
                if let Some(intent) = intent {
                    self.apply_menu_intent(intent);
                }
            }
        }
    }
}

// workout-dash-tui/src/app/modals.rs
use super::navigation::ensure_selection_is_valid;
use super::state::{ActiveModal, AddWorkoutField, App};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::error;

fn next_add_field(field: AddWorkoutField) -> AddWorkoutField {
    match field {
        AddWorkoutField::Name => AddWorkoutField::Exercises,
        AddWorkoutField::Exercises => AddWorkoutField::Confirm,
        AddWorkoutField::Confirm => AddWorkoutField::Cancel,
        AddWorkoutField::Cancel => AddWorkoutField::Name,
    }
}

fn previous_add_field(field: AddWorkoutField) -> AddWorkoutField {
    match field {
        AddWorkoutField::Name => AddWorkoutField::Cancel,
        AddWorkoutField::Exercises => AddWorkoutField::Name,
        AddWorkoutField::Confirm => AddWorkoutField::Exercises,
        AddWorkoutField::Cancel => AddWorkoutField::Confirm,
    }
}

/// Splits the comma-separated exercise input into an ordered list.
fn parse_exercise_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

// --- Input Handling ---

pub fn handle_add_workout_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let mut should_close = false;
    let mut should_submit = false;

    if let ActiveModal::AddWorkout {
        ref mut name_input,
        ref mut exercises_input,
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        *error_message = None; // Clear error on most inputs

        match key.code {
            KeyCode::Esc => should_close = true,
            KeyCode::Tab | KeyCode::Down => *focused_field = next_add_field(*focused_field),
            KeyCode::BackTab | KeyCode::Up => *focused_field = previous_add_field(*focused_field),
            KeyCode::Enter => match *focused_field {
                AddWorkoutField::Confirm => should_submit = true,
                AddWorkoutField::Cancel => should_close = true,
                // Enter in an input moves on to the next field
                _ => *focused_field = next_add_field(*focused_field),
            },
            KeyCode::Char(c) => match *focused_field {
                AddWorkoutField::Name => name_input.push(c),
                AddWorkoutField::Exercises => exercises_input.push(c),
                _ => {}
            },
            KeyCode::Backspace => match *focused_field {
                AddWorkoutField::Name => {
                    name_input.pop();
                }
                AddWorkoutField::Exercises => {
                    exercises_input.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }

    if should_submit {
        submit_add_workout(app);
    } else if should_close {
        app.active_modal = ActiveModal::None;
    }
    Ok(())
}

// --- Submission Logic ---

fn submit_add_workout(app: &mut App) {
    let (name, exercises) = match &app.active_modal {
        ActiveModal::AddWorkout {
            name_input,
            exercises_input,
            ..
        } => (
            name_input.trim().to_string(),
            parse_exercise_list(exercises_input),
        ),
        _ => return,
    };

    if name.is_empty() {
        if let ActiveModal::AddWorkout {
            ref mut error_message,
            ..
        } = app.active_modal
        {
            *error_message = Some("Workout name cannot be empty.".to_string());
        }
        return;
    }

    // add_workout reloads the full snapshot on success
    match app.service.add_workout(&name, &exercises) {
        Ok(()) => {
            app.active_modal = ActiveModal::None;
            ensure_selection_is_valid(&mut app.workout_list_state, app.service.workouts.len());
            app.notify_success("Workout added successfully");
        }
        Err(e) => {
            error!("Error adding workout: {:#}", e);
            // Leave the modal open so the inputs aren't lost.
            app.notify_error("Failed to add workout");
        }
    }
}

pub fn handle_confirm_delete_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if let ActiveModal::ConfirmDeleteWorkout {
        workout_id,
        workout_name,
    } = &app.active_modal
    {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let id = workout_id.clone();
                let name = workout_name.clone();
                app.active_modal = ActiveModal::None;
                app.submit_delete_workout(&id, &name);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.active_modal = ActiveModal::None;
            }
            _ => {}
        }
    }
    Ok(())
}

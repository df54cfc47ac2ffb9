// workout-dash-tui/src/ui/menu.rs
//
// The reusable list widget: renders either the whole workout collection or
// a single workout's exercises, and maps key events onto typed intents that
// the app applies. The widget itself never touches the service.
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::BTreeMap;
use workout_dash_lib::WorkoutEntry;

/// What the menu is showing.
pub enum MenuMode<'a> {
    /// The collection of workouts; rows drill into their detail view.
    Workouts(&'a BTreeMap<String, WorkoutEntry>),
    /// The exercises of one workout. Rows are not navigable, and every
    /// delete intent carries the owning workout name.
    Exercises {
        workout: &'a str,
        exercises: &'a [String],
    },
}

/// Intents the menu emits back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIntent {
    /// Drill into the named workout's detail view.
    Open(String),
    DeleteWorkout { id: String, name: String },
    DeleteExercise { workout: String, exercise: String },
}

/// Maps a key event onto an intent, given the current selection.
pub fn intent_for_key(key: KeyEvent, mode: &MenuMode, selected: Option<usize>) -> Option<MenuIntent> {
    let index = selected?;
    match mode {
        MenuMode::Workouts(workouts) => {
            let (name, entry) = workouts.iter().nth(index)?;
            match key.code {
                KeyCode::Enter => Some(MenuIntent::Open(name.clone())),
                KeyCode::Char('d') | KeyCode::Delete => Some(MenuIntent::DeleteWorkout {
                    id: entry.id.clone(),
                    name: name.clone(),
                }),
                _ => None,
            }
        }
        MenuMode::Exercises { workout, exercises } => {
            let exercise = exercises.get(index)?;
            match key.code {
                // Exercise rows don't open anything.
                KeyCode::Char('d') | KeyCode::Delete => Some(MenuIntent::DeleteExercise {
                    workout: (*workout).to_string(),
                    exercise: exercise.clone(),
                }),
                _ => None,
            }
        }
    }
}

pub fn render_menu(f: &mut Frame, mode: &MenuMode, state: &mut ListState, area: Rect) {
    let (title, items): (String, Vec<ListItem>) = match mode {
        MenuMode::Workouts(workouts) => (
            format!("Workouts ({})", workouts.len()),
            workouts
                .iter()
                .map(|(name, entry)| {
                    let count = entry.exercises.len();
                    let label = if count == 1 {
                        format!("{name}  (1 exercise)")
                    } else {
                        format!("{name}  ({count} exercises)")
                    };
                    ListItem::new(label)
                })
                .collect(),
        ),
        MenuMode::Exercises { workout, exercises } => (
            format!("Exercises: {workout}"),
            exercises
                .iter()
                .map(|exercise| ListItem::new(exercise.as_str()))
                .collect(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Yellow));

    if items.is_empty() {
        let placeholder = match mode {
            MenuMode::Workouts(_) => "No workouts yet. Press [a] to add one.",
            MenuMode::Exercises { .. } => "No exercises in this workout.",
        };
        let paragraph = Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}

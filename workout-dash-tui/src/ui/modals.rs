// workout-dash-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, AddWorkoutField, App},
    ui::layout::{centered_rect, centered_rect_fixed},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::AddWorkout { .. } => render_add_workout_modal(f, app),
        ActiveModal::ConfirmDeleteWorkout { .. } => render_confirmation_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(""),
        Line::from("--- Workouts ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" Enter: Open Selected Workout"),
        Line::from(" a: Add New Workout"),
        Line::from(" d / Delete: Delete Selected Workout"),
        Line::from(" r: Reload From Server"),
        Line::from(""),
        Line::from("--- Workout Detail ---").style(Style::new().bold().underlined()),
        Line::from(" k/j / ↑/↓: Navigate Exercises"),
        Line::from(" d / Delete: Remove Selected Exercise"),
        Line::from(" Esc / h / ←: Back to Workouts"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_add_workout_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::AddWorkout {
        name_input,
        exercises_input,
        focused_field,
        error_message,
    } = &app.active_modal
    {
        let block = Block::default()
            .title("Add New Workout")
            .borders(Borders::ALL)
            .border_style(Style::new().yellow());

        // --- Calculate required height ---
        let mut required_height = 2; // Borders/Padding
        required_height += 1; // Name label
        required_height += 1; // Name input
        required_height += 1; // Exercises label
        required_height += 1; // Exercises input
        required_height += 1; // Spacer
        required_height += 1; // Buttons row
        if error_message.is_some() {
            required_height += 1; // Error Message
        }

        let fixed_width = 60;
        let area = centered_rect_fixed(fixed_width, required_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let mut constraints = vec![
            Constraint::Length(1), // Name label
            Constraint::Length(1), // Name input
            Constraint::Length(1), // Exercises label
            Constraint::Length(1), // Exercises input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons row
        ];
        if error_message.is_some() {
            constraints.push(Constraint::Length(1)); // Error Message
        }
        constraints.push(Constraint::Min(0)); // Remainder

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner_area);

        let base_input_style = Style::default().fg(Color::White);
        let input_margin = Margin {
            vertical: 0,
            horizontal: 1,
        };

        // Row 1: Name
        f.render_widget(Paragraph::new("Name:"), chunks[0]);
        let name_style = if *focused_field == AddWorkoutField::Name {
            base_input_style.reversed()
        } else {
            base_input_style
        };
        let name_input_area = chunks[1].inner(&input_margin);
        f.render_widget(
            Paragraph::new(name_input.as_str()).style(name_style),
            name_input_area,
        );

        // Row 2: Exercises
        f.render_widget(Paragraph::new("Exercises (comma-separated):"), chunks[2]);
        let exercises_style = if *focused_field == AddWorkoutField::Exercises {
            base_input_style.reversed()
        } else {
            base_input_style
        };
        let exercises_input_area = chunks[3].inner(&input_margin);
        f.render_widget(
            Paragraph::new(exercises_input.as_str()).style(exercises_style),
            exercises_input_area,
        );

        // Row 3: Buttons
        let base_button_style = Style::default().fg(Color::White);
        let button_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[5]);
        let ok_button = Paragraph::new(" OK ")
            .alignment(ratatui::layout::Alignment::Center)
            .style(if *focused_field == AddWorkoutField::Confirm {
                base_button_style.reversed()
            } else {
                base_button_style
            });
        f.render_widget(ok_button, button_layout[0]);
        let cancel_button = Paragraph::new(" Cancel ")
            .alignment(ratatui::layout::Alignment::Center)
            .style(if *focused_field == AddWorkoutField::Cancel {
                base_button_style.reversed()
            } else {
                base_button_style
            });
        f.render_widget(cancel_button, button_layout[1]);

        // Row 4: Error Message
        if let Some(err) = error_message {
            f.render_widget(
                Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red)),
                chunks[6],
            );
        }

        // --- Cursor Positioning ---
        match focused_field {
            AddWorkoutField::Name => {
                let cursor_x = (name_input_area.x + name_input.chars().count() as u16)
                    .min(name_input_area.right().saturating_sub(1));
                f.set_cursor(cursor_x, name_input_area.y);
            }
            AddWorkoutField::Exercises => {
                let cursor_x = (exercises_input_area.x + exercises_input.chars().count() as u16)
                    .min(exercises_input_area.right().saturating_sub(1));
                f.set_cursor(cursor_x, exercises_input_area.y);
            }
            _ => {} // No cursor for buttons
        }
    }
}

fn render_confirmation_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::ConfirmDeleteWorkout { workout_name, .. } = &app.active_modal {
        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Red).add_modifier(Modifier::BOLD));

        let question = format!("Delete workout \"{workout_name}\"?");
        let options = "[Y]es / [N]o (Esc)";

        let question_width = question.chars().count() as u16;
        let options_width = options.len() as u16;
        let text_width = question_width.max(options_width);
        let modal_width = text_width + 4; // Add padding
        let modal_height = 4; // border + question + options + border

        let area = centered_rect_fixed(modal_width, modal_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Question
                Constraint::Length(1), // Options
            ])
            .split(inner_area);

        f.render_widget(
            Paragraph::new(question).alignment(ratatui::layout::Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(options).alignment(ratatui::layout::Alignment::Center),
            chunks[1],
        );
    }
}

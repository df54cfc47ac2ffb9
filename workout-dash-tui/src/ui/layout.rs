// workout-dash-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, ActiveView, App},
    ui::{
        menu::{render_menu, MenuMode},
        modals::render_modal,
        status_bar::render_status_bar,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Create main layout: header on top, content below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_header(f, app, main_chunks[0]);
    render_main_content(f, app, main_chunks[1]);
    render_status_bar(f, app, main_chunks[2]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.active_view {
        ActiveView::Workouts => "Workouts".to_string(),
        ActiveView::WorkoutDetail { name } => format!("Workouts › {name}"),
    };
    let header = Paragraph::new(title)
        .style(Style::new().bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

// Render the content area based on the active view
fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    if app.is_loading {
        render_loading(f, area);
        return;
    }

    match &app.active_view {
        ActiveView::Workouts => {
            let mode = MenuMode::Workouts(&app.service.workouts);
            render_menu(f, &mode, &mut app.workout_list_state, area);
        }
        ActiveView::WorkoutDetail { name } => match app.service.exercises_for(name) {
            Some(exercises) => {
                let mode = MenuMode::Exercises {
                    workout: name,
                    exercises,
                };
                render_menu(f, &mode, &mut app.exercise_list_state, area);
            }
            None => {
                // Refresh dropped the workout under us; the next loop
                // iteration pops back to the collection.
                render_loading(f, area);
            }
        },
    }
}

fn render_loading(f: &mut Frame, area: Rect) {
    let vertical_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);
    let loading = Paragraph::new("Loading workouts...").alignment(Alignment::Center);
    f.render_widget(loading, vertical_center[1]);
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Like `centered_rect` but with a fixed size in cells.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

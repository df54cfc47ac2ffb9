// workout-dash-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, ActiveView, App, NoticeKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match &app.active_modal {
        ActiveModal::None => match &app.active_view {
            ActiveView::Workouts => {
                "[↑↓/jk] Nav | [Enter] Open | [a]dd | [d]elete | [r]eload | [?] Help | [q]uit "
            }
            ActiveView::WorkoutDetail { .. } => {
                "[↑↓/jk] Nav | [d]elete Exercise | [Esc/h] Back | [?] Help | [q]uit "
            }
        }
        .to_string(),
        ActiveModal::Help => " [Esc/Enter/?] Close Help ".to_string(),
        ActiveModal::AddWorkout { .. } => {
            " [Esc] Cancel | [Enter] Confirm/Next | [Tab/↑↓] Navigate ".to_string()
        }
        ActiveModal::ConfirmDeleteWorkout { .. } => " [y] Confirm | [n/Esc] Cancel ".to_string(),
    };

    let (notice_text, notice_color) = match &app.notice {
        Some(notice) => (
            format!("{}: {} ", notice.title, notice.description),
            match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            },
        ),
        None => (String::new(), Color::White),
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let notice_paragraph = Paragraph::new(notice_text)
        .style(Style::default().bg(Color::DarkGray).fg(notice_color))
        .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(notice_paragraph, status_chunks[1]);
}

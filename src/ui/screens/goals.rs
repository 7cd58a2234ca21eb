use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::engine;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.goals.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .goals
        .iter()
        .enumerate()
        .skip(app.goal_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, goal)| {
            // Raw IEEE result on purpose: a zero target renders as
            // "inf%" (or "NaN%"), it is not guarded anywhere.
            let pct = engine::progress(goal);
            let ratio = (pct / 100.0).clamp(0.0, 1.0);

            let color = if ratio >= 0.75 {
                theme::GREEN
            } else if ratio >= 0.35 {
                theme::YELLOW
            } else {
                theme::RED
            };

            let style = if i == app.goal_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = create_progress_bar(ratio, 20);
            let display_name = truncate(&goal.name, 17);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{display_name:<18}"), style),
                Span::styled(
                    format!(
                        "{}/{} ",
                        format_amount(goal.saved_amount),
                        format_amount(goal.target_amount)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {pct:.1}%"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Savings Goals ({}) ", app.goals.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No savings goals yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :goal <name> <target> [saved] to create one",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Savings Goals ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(msg, area);
}

fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

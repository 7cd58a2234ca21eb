use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::engine::{self, HISTORY_MONTHS};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, trend_month_labels, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let alert_height = (app.alerts.len().max(1) + 2) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alert_height), // Budget alerts
            Constraint::Min(10),              // Spending trend + forecast
            Constraint::Length(10),           // Category chart + goals
        ])
        .split(area);

    render_alerts(f, chunks[0], app);
    render_trend_chart(f, chunks[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_spending_chart(f, bottom[0], app);
    render_goals_summary(f, bottom[1], app);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.alerts.is_empty() {
            theme::OVERLAY
        } else {
            theme::RED
        }))
        .title(Span::styled(
            " Budget Alerts ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = if app.alerts.is_empty() {
        vec![Line::from(Span::styled(
            "All budgets on track this month",
            theme::ok_style(),
        ))]
    } else {
        app.alerts
            .iter()
            .map(|alert| {
                Line::from(vec![
                    Span::styled("⚠ ", theme::alert_style()),
                    Span::styled(
                        format!("{}: ", alert.category),
                        Style::default()
                            .fg(theme::RED)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "over budget by {} (spent {} of {})",
                            format_amount(alert.exceeded),
                            format_amount(alert.spent()),
                            format_amount(alert.budget),
                        ),
                        theme::normal_style(),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_trend_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = &app.trend;

    let actual: Vec<(f64, f64)> = series
        .actual
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    // Bridge from the last actual point so the projection reads as a
    // continuation of the same line.
    let mut projected: Vec<(f64, f64)> = vec![(
        HISTORY_MONTHS as f64,
        series.actual[HISTORY_MONTHS],
    )];
    projected.extend(
        series
            .projected
            .iter()
            .enumerate()
            .map(|(i, &v)| ((HISTORY_MONTHS + 1 + i) as f64, v)),
    );

    let max_y = series
        .actual
        .iter()
        .chain(series.projected.iter())
        .fold(0.0_f64, |acc, &v| acc.max(v))
        .max(1.0)
        * 1.15;

    let labels = trend_month_labels(app.today);
    let x_labels: Vec<Span> = labels
        .iter()
        .map(|l| Span::styled(l.clone(), theme::dim_style()))
        .collect();
    let y_labels = vec![
        Span::styled("0", theme::dim_style()),
        Span::styled(format!("{:.0}", max_y / 2.0), theme::dim_style()),
        Span::styled(format!("{max_y:.0}"), theme::dim_style()),
    ];

    let datasets = vec![
        Dataset::default()
            .name("actual")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::ACCENT))
            .data(&actual),
        Dataset::default()
            .name("forecast")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::YELLOW))
            .data(&projected),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Spending Trend & Forecast ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (labels.len() - 1) as f64])
                .labels(x_labels)
                .style(Style::default().fg(theme::OVERLAY)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max_y])
                .labels(y_labels)
                .style(Style::default().fg(theme::OVERLAY)),
        );

    f.render_widget(chart, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Spending by Category ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.spending_by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .spending_by_category
        .iter()
        .map(|(category, amount)| {
            let val = amount.to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(truncate(category.as_str(), 9)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_goals_summary(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Savings Goals ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.goals.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No goals yet. Add one with :goal",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let lines: Vec<Line> = app
        .goals
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|goal| {
            let pct = engine::progress(goal);
            let ratio = (pct / 100.0).clamp(0.0, 1.0);
            let filled = (ratio * 10.0) as usize;
            let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled));
            Line::from(vec![
                Span::styled(format!("{:<14}", truncate(&goal.name, 13)), theme::normal_style()),
                Span::styled(bar, Style::default().fg(theme::GREEN)),
                Span::styled(format!(" {pct:.0}%"), theme::dim_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

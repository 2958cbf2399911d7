//! Plain-text rendering of dashboard widgets

use crate::page::{Dashboard, Widget};
use pulse_core::{
    Result, TableView,
    format::{format_change, format_count, format_metric, format_percentage, render_bar},
    types::{DailyTraffic, MetricCard, TrafficSource},
};

fn section(title: &str, body: &str) -> String {
    format!("{title}\n{}\n{body}", "─".repeat(title.chars().count()))
}

/// Metric cards, one per line
pub(crate) fn render_cards(cards: &[MetricCard]) -> String {
    let label_width = cards
        .iter()
        .map(|card| card.label.chars().count())
        .max()
        .unwrap_or(0);

    cards
        .iter()
        .map(|card| {
            format!(
                "{:<label_width$}  {:>8}  {:>7}",
                card.label,
                format_metric(card),
                format_change(card.change)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A sortable table with the active column marked in the header
pub(crate) fn render_table(view: &TableView, bar_width: usize) -> Result<String> {
    let fields = view.vocabulary().fields;
    let titles: Vec<String> = view.headers().iter().map(|header| header.title()).collect();

    let grid: Vec<Vec<String>> = view
        .rows()?
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| match cell.bar {
                    Some(width) if bar_width > 0 => {
                        format!("{} {}", render_bar(width, bar_width), cell.text)
                    }
                    _ => cell.text.clone(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(column, title)| {
            grid.iter()
                .filter_map(|row| row.get(column))
                .map(|text| text.chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .zip(fields)
            .map(|((text, &width), spec)| {
                if spec.kind.is_numeric() {
                    format!("{text:>width$}")
                } else {
                    format!("{text:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(&titles)];
    lines.extend(grid.iter().map(|row| line(row)));
    Ok(lines.join("\n"))
}

/// Traffic sources as horizontal bars
pub(crate) fn render_sources(sources: &[TrafficSource], bar_width: usize) -> String {
    let label_width = sources
        .iter()
        .map(|source| source.source.chars().count())
        .max()
        .unwrap_or(0);

    sources
        .iter()
        .map(|source| {
            format!(
                "{:<label_width$}  {}  {:>6}",
                source.source,
                render_bar(source.share, bar_width),
                format_percentage(source.share)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Daily views scaled against the busiest day
pub(crate) fn render_trend(days: &[DailyTraffic], bar_width: usize) -> String {
    let peak = days.iter().map(|day| day.views).max().unwrap_or(0);

    days.iter()
        .map(|day| {
            #[allow(clippy::cast_precision_loss)]
            let share = if peak == 0 {
                0.0
            } else {
                day.views as f64 / peak as f64 * 100.0
            };
            format!(
                "{}  {}  {:>6} views  {:>6} visitors",
                day.day.format("%a %d %b"),
                render_bar(share, bar_width),
                format_count(i64::try_from(day.views).unwrap_or(i64::MAX)),
                format_count(i64::try_from(day.visitors).unwrap_or(i64::MAX)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line of the live visitor feed
pub(crate) fn render_live(value: u64) -> String {
    format!("● {value} active visitors right now")
}

/// A single table widget with its title
pub(crate) fn render_widget(page: &Dashboard, widget: Widget, bar_width: usize) -> Result<String> {
    let title = match widget {
        Widget::Content => "Content Performance",
        Widget::Goals => "Goal Tracking",
        Widget::Visitors => "Visitors by Location",
    };
    let mut body = render_table(page.table(widget), bar_width)?;
    if widget == Widget::Goals {
        let (met, total) = page.goals_met;
        body.push_str(&format!("\n{met} of {total} goals met"));
    }
    Ok(section(title, &body))
}

/// Every section of the page
pub(crate) fn render_overview(page: &Dashboard, bar_width: usize, live: u64) -> Result<String> {
    let sections = [
        section("Overview", &render_cards(&page.cards)),
        section("Views This Week", &render_trend(&page.trend, bar_width)),
        section("Traffic Sources", &render_sources(&page.sources, bar_width)),
        render_widget(page, Widget::Content, bar_width)?,
        render_widget(page, Widget::Goals, bar_width)?,
        section("Real-Time Visitors", &render_live(live)),
        render_widget(page, Widget::Visitors, bar_width)?,
    ];
    Ok(sections.join("\n\n"))
}

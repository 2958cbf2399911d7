//! Dashboard page composed from the core widgets

use chrono::NaiveDate;
use pulse_core::{
    Config, RecordFilter, Result, TableView, fixtures,
    types::{DailyTraffic, MetricCard, TrafficSource},
    vocabulary::{CONTENT, GOALS, LOCATIONS},
};
use tracing::debug;

/// Which table widget a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Widget {
    Content,
    Goals,
    Visitors,
}

/// All widget state for one rendered page
#[derive(Debug)]
pub(crate) struct Dashboard {
    pub(crate) cards: Vec<MetricCard>,
    pub(crate) sources: Vec<TrafficSource>,
    pub(crate) trend: Vec<DailyTraffic>,
    /// Goals that reached their target, out of all goals
    pub(crate) goals_met: (usize, usize),
    content: TableView,
    goals: TableView,
    visitors: TableView,
}

impl Dashboard {
    /// Build the page from mock data
    pub(crate) fn new(config: &Config, today: NaiveDate) -> Self {
        let limit = Some(config.dashboard.row_limit);
        let goals = fixtures::goals();
        let met = goals.iter().filter(|goal| goal.is_complete()).count();

        Self {
            cards: fixtures::metric_cards(),
            sources: fixtures::traffic_sources(),
            trend: fixtures::daily_traffic(today),
            goals_met: (met, goals.len()),
            content: TableView::from_items(CONTENT, &fixtures::content_items()).with_limit(limit),
            goals: TableView::from_items(GOALS, &goals).with_limit(limit),
            visitors: TableView::from_items(LOCATIONS, &fixtures::visitor_locations())
                .with_limit(limit),
        }
    }

    pub(crate) const fn table(&self, widget: Widget) -> &TableView {
        match widget {
            Widget::Content => &self.content,
            Widget::Goals => &self.goals,
            Widget::Visitors => &self.visitors,
        }
    }

    fn table_mut(&mut self, widget: Widget) -> &mut TableView {
        match widget {
            Widget::Content => &mut self.content,
            Widget::Goals => &mut self.goals,
            Widget::Visitors => &mut self.visitors,
        }
    }

    /// Replay header clicks in order
    pub(crate) fn apply_sorts(&mut self, widget: Widget, fields: &[String]) -> Result<()> {
        let table = self.table_mut(widget);
        for field in fields {
            let state = table.toggle(field)?;
            debug!(?widget, field = %state.field, direction = %state.direction, "Header clicked");
        }
        Ok(())
    }

    pub(crate) fn apply_filter(&mut self, widget: Widget, filter: RecordFilter) -> Result<()> {
        self.table_mut(widget).set_filter(filter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulse_core::SortDirection;

    fn dashboard() -> Dashboard {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        Dashboard::new(&Config::default(), today)
    }

    #[test]
    fn test_sorts_replay_as_toggles() {
        let mut page = dashboard();
        page.apply_sorts(Widget::Content, &["views".to_string(), "views".to_string()])
            .unwrap();
        page.apply_sorts(Widget::Content, &["views".to_string()]).unwrap();

        let state = page.table(Widget::Content).sort_state();
        assert_eq!(state.field, "views");
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_widgets_keep_separate_state() {
        let mut page = dashboard();
        page.apply_sorts(Widget::Goals, &["name".to_string()]).unwrap();

        assert_eq!(page.table(Widget::Goals).sort_state().field, "name");
        assert_eq!(page.table(Widget::Content).sort_state().field, "views");
        assert_eq!(page.table(Widget::Visitors).sort_state().field, "visitors");
    }

    #[test]
    fn test_counts_goals_that_reached_target() {
        let page = dashboard();
        assert_eq!(page.goals_met, (1, 4));
    }

    #[test]
    fn test_unknown_sort_field_is_reported() {
        let mut page = dashboard();
        assert!(page.apply_sorts(Widget::Visitors, &["views".to_string()]).is_err());
    }
}

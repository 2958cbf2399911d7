//! In-memory mock data feeding every dashboard widget

use crate::types::{
    ContentItem, DailyTraffic, Goal, MetricCard, MetricUnit, Status, TrafficSource,
    VisitorLocation,
};
use chrono::{Duration, NaiveDate};

fn content(
    id: u32,
    title: &str,
    category: &str,
    status: Status,
    (views, shares, comments): (u64, u64, u64),
    engagement: f64,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        category: category.to_string(),
        status,
        views,
        shares,
        comments,
        engagement,
    }
}

/// Articles shown in the Content Performance table
#[must_use]
pub fn content_items() -> Vec<ContentItem> {
    vec![
        content(1, "10 Tips for Better Content Strategy", "Marketing", Status::Published, (45_230, 1_240, 89), 8.5),
        content(2, "The Future of Digital Marketing", "Marketing", Status::Published, (38_920, 980, 156), 7.2),
        content(3, "Understanding SEO in 2024", "SEO", Status::Published, (1_250_400, 2_100, 234), 9.1),
        content(4, "Social Media Best Practices", "Social", Status::Published, (29_840, 3_450, 67), 6.8),
        content(5, "Content Analytics Deep Dive", "Analytics", Status::Scheduled, (0, 0, 0), 0.0),
        content(6, "Email Campaign Optimization", "Marketing", Status::Draft, (850, 12, 3), 2.4),
        content(7, "Building a Rust Data Pipeline", "Engineering", Status::Published, (67_410, 5_020, 412), 11.3),
        content(8, "Archive: 2022 Year in Review", "Company", Status::Archived, (12_900, 140, 22), 3.9),
    ]
}

/// Goals shown in the Goal Tracking widget
#[must_use]
pub fn goals() -> Vec<Goal> {
    let goal = |id, name: &str, current, target| Goal {
        id,
        name: name.to_string(),
        current,
        target,
    };

    vec![
        goal(1, "Monthly page views", 842_000, 1_000_000),
        goal(2, "Newsletter subscribers", 12_400, 10_000),
        goal(3, "Published articles", 18, 25),
        goal(4, "Average engagement (‰)", 72, 100),
    ]
}

/// Countries listed in the Real-Time Visitors widget
#[must_use]
pub fn visitor_locations() -> Vec<VisitorLocation> {
    let location = |id, country: &str, visitors, percentage| VisitorLocation {
        id,
        country: country.to_string(),
        visitors,
        percentage,
    };

    vec![
        location(1, "United States", 487, 39.1),
        location(2, "United Kingdom", 203, 16.3),
        location(3, "Germany", 156, 12.5),
        location(4, "Canada", 134, 10.7),
        location(5, "France", 98, 7.9),
        location(6, "Other", 169, 13.5),
    ]
}

/// Headline metric cards
#[must_use]
pub fn metric_cards() -> Vec<MetricCard> {
    let card = |label: &str, value, unit, change| MetricCard {
        label: label.to_string(),
        value,
        unit,
        change,
    };

    vec![
        card("Total Views", 2_450_000.0, MetricUnit::Count, 12.5),
        card("Unique Visitors", 892_000.0, MetricUnit::Count, 8.2),
        card("Avg. Time on Page", 204.0, MetricUnit::Duration, -3.1),
        card("Engagement Rate", 7.8, MetricUnit::Percentage, 1.4),
    ]
}

/// Traffic split for the sources chart
#[must_use]
pub fn traffic_sources() -> Vec<TrafficSource> {
    [
        ("Organic Search", 42.0),
        ("Social Media", 24.0),
        ("Direct", 18.0),
        ("Referral", 11.0),
        ("Email", 5.0),
    ]
    .into_iter()
    .map(|(source, share)| TrafficSource {
        source: source.to_string(),
        share,
    })
    .collect()
}

/// One week of traffic for the trend chart, ending on `last_day`
#[must_use]
pub fn daily_traffic(last_day: NaiveDate) -> Vec<DailyTraffic> {
    const VIEWS: [(u64, u64); 7] = [
        (12_400, 4_100),
        (13_900, 4_620),
        (11_800, 3_950),
        (15_200, 5_080),
        (16_700, 5_530),
        (9_800, 3_240),
        (8_900, 2_980),
    ];

    VIEWS
        .iter()
        .zip((0_i64..7).rev())
        .map(|(&(views, visitors), days_back)| DailyTraffic {
            day: last_day - Duration::days(days_back),
            views,
            visitors,
        })
        .collect()
}

//! Core data types for the content-pulse dashboard

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Record identifier type
pub type RecordId = u32;

/// Publication status of a piece of content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Live on the site
    Published,
    /// Still being written
    Draft,
    /// Queued for a future publication date
    Scheduled,
    /// Taken down but kept for reference
    Archived,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Published => write!(f, "published"),
            Self::Draft => write!(f, "draft"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "published" => Ok(Self::Published),
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "archived" => Ok(Self::Archived),
            other => Err(crate::Error::validation(
                "status",
                format!("unknown status '{other}'"),
            )),
        }
    }
}

/// Sort direction for a table column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest value first
    Ascending,
    /// Largest value first
    #[default]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow glyph shown next to the active column header
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(crate::Error::validation(
                "direction",
                format!("expected 'asc' or 'desc', got '{other}'"),
            )),
        }
    }
}

/// A single cell value inside a [`Record`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Any numeric magnitude (counts, percentages)
    Number(f64),
    /// Free text
    Text(String),
    /// Enumerated publication status
    Status(Status),
}

impl FieldValue {
    /// Short name of the value's kind, used in error messages
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Status(_) => "status",
        }
    }

    /// Numeric payload, if any
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if any
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Compare two values of the same kind.
    ///
    /// Returns `None` when the kinds differ. Numbers use IEEE total ordering
    /// so NaN never poisons a sort.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Some(a.total_cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Status(a), Self::Status(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u64> for FieldValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Status> for FieldValue {
    fn from(value: Status) -> Self {
        Self::Status(value)
    }
}

/// One row of displayable data
///
/// Field order is preserved so rendered rows follow insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Stable identifier used as the iteration key
    pub id: RecordId,

    /// Values keyed by field name
    values: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            values: IndexMap::new(),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(field.into(), value.into())
    }

    /// Look up a field's value
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Iterate over `(field, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields held by the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An article's performance metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Unique identifier
    pub id: RecordId,
    /// Article title
    pub title: String,
    /// Editorial category
    pub category: String,
    /// Publication status
    pub status: Status,
    /// Total page views
    pub views: u64,
    /// Social shares
    pub shares: u64,
    /// Reader comments
    pub comments: u64,
    /// Engagement rate in percent
    pub engagement: f64,
}

impl From<&ContentItem> for Record {
    fn from(item: &ContentItem) -> Self {
        Self::new(item.id)
            .with("title", item.title.as_str())
            .with("category", item.category.as_str())
            .with("status", item.status)
            .with("views", item.views)
            .with("shares", item.shares)
            .with("comments", item.comments)
            .with("engagement", item.engagement)
    }
}

/// A tracked goal with a numeric target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier
    pub id: RecordId,
    /// Goal name
    pub name: String,
    /// Progress so far
    pub current: u64,
    /// Value at which the goal is met
    pub target: u64,
}

impl Goal {
    /// Progress towards the target in percent, unclamped.
    ///
    /// A zero target yields zero progress.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        self.current as f64 / self.target as f64 * 100.0
    }

    /// Whether the target has been reached
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current >= self.target
    }
}

impl From<&Goal> for Record {
    fn from(goal: &Goal) -> Self {
        Self::new(goal.id)
            .with("name", goal.name.as_str())
            .with("current", goal.current)
            .with("target", goal.target)
            .with("progress", goal.progress())
    }
}

/// Visitors currently on the site from one country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitorLocation {
    /// Unique identifier
    pub id: RecordId,
    /// Country name
    pub country: String,
    /// Active visitors
    pub visitors: u64,
    /// Share of all active visitors in percent
    pub percentage: f64,
}

impl From<&VisitorLocation> for Record {
    fn from(location: &VisitorLocation) -> Self {
        Self::new(location.id)
            .with("country", location.country.as_str())
            .with("visitors", location.visitors)
            .with("percentage", location.percentage)
    }
}

/// How a metric card's headline value is displayed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    /// Abbreviated count (K/M)
    Count,
    /// Percentage with one decimal
    Percentage,
    /// Duration in seconds
    Duration,
}

/// Headline metric with its period-over-period change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    /// Card title
    pub label: String,
    /// Raw value
    pub value: f64,
    /// Display unit for the value
    pub unit: MetricUnit,
    /// Change versus the previous period in percent
    pub change: f64,
}

/// Share of traffic arriving from one source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSource {
    /// Source name
    pub source: String,
    /// Share of all visits in percent
    pub share: f64,
}

/// One day of traffic for the trend chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyTraffic {
    /// Calendar day
    pub day: NaiveDate,
    /// Page views that day
    pub views: u64,
    /// Unique visitors that day
    pub visitors: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(
            "asc".parse::<SortDirection>().unwrap(),
            SortDirection::Ascending
        );
        assert_eq!(
            "DESCENDING".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_status_roundtrip_through_display() {
        for status in [
            Status::Published,
            Status::Draft,
            Status::Scheduled,
            Status::Archived,
        ] {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert!("deleted".parse::<Status>().is_err());
    }

    #[test]
    fn test_field_value_compare() {
        let a = FieldValue::from(1.0);
        let b = FieldValue::from(2.0);
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        let t1 = FieldValue::from("Alpha");
        let t2 = FieldValue::from("Beta");
        assert_eq!(t2.compare(&t1), Some(Ordering::Greater));

        let s1 = FieldValue::from(Status::Published);
        let s2 = FieldValue::from(Status::Archived);
        assert_eq!(s1.compare(&s2), Some(Ordering::Less));

        assert_eq!(a.compare(&t1), None);
    }

    #[test]
    fn test_nan_has_a_defined_order() {
        let nan = FieldValue::Number(f64::NAN);
        let one = FieldValue::Number(1.0);
        assert!(nan.compare(&one).is_some());
    }

    #[test]
    fn test_record_builder_keeps_insertion_order() {
        let record = Record::new(3)
            .with("title", "Hello")
            .with("views", 42_u64)
            .with("status", Status::Draft);

        let fields: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["title", "views", "status"]);
        assert_eq!(record.get("views"), Some(&FieldValue::Number(42.0)));
        assert_eq!(record.len(), 3);
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_goal_progress() {
        let goal = Goal {
            id: 1,
            name: "Newsletter signups".to_string(),
            current: 750,
            target: 1000,
        };
        assert_eq!(goal.progress(), 75.0);
        assert!(!goal.is_complete());

        let exceeded = Goal {
            current: 1200,
            ..goal.clone()
        };
        assert_eq!(exceeded.progress(), 120.0);
        assert!(exceeded.is_complete());

        let zero = Goal { target: 0, ..goal };
        assert_eq!(zero.progress(), 0.0);
    }

    #[test]
    fn test_content_item_into_record() {
        let item = ContentItem {
            id: 9,
            title: "Rust in production".to_string(),
            category: "Engineering".to_string(),
            status: Status::Published,
            views: 15_000,
            shares: 320,
            comments: 45,
            engagement: 7.5,
        };
        let record = Record::from(&item);

        assert_eq!(record.id, 9);
        assert_eq!(
            record.get("title").and_then(FieldValue::as_text),
            Some("Rust in production")
        );
        assert_eq!(record.get("views").and_then(FieldValue::as_number), Some(15_000.0));
        assert_eq!(
            record.get("status"),
            Some(&FieldValue::Status(Status::Published))
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new(1).with("views", 10_u64).with("title", "A");
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

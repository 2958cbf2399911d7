//! Closed field vocabularies for each dashboard view
//!
//! Every table-like view sorts and formats through the same vocabulary, so a
//! field name that is valid for sorting is also one the formatter knows how
//! to render.

use crate::types::FieldValue;
use crate::{Error, Result};
use serde::Serialize;

/// How a field's values are compared and displayed
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, compared lexicographically
    Text,
    /// Non-negative magnitude shown abbreviated (K/M)
    Count,
    /// Percentage shown with one decimal and a bar
    Percentage,
    /// Publication status
    Status,
}

impl FieldKind {
    /// Whether a value can live in a field of this kind
    #[must_use]
    pub const fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, FieldValue::Text(_))
                | (Self::Count | Self::Percentage, FieldValue::Number(_))
                | (Self::Status, FieldValue::Status(_))
        )
    }

    /// Name of the value kind this field expects
    #[must_use]
    pub const fn value_kind(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Count | Self::Percentage => "number",
            Self::Status => "status",
        }
    }

    /// Whether the field holds a number
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Count | Self::Percentage)
    }
}

/// A single named, typed column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name used as the record key
    pub name: &'static str,
    /// Column header
    pub label: &'static str,
    /// Value kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Describe a field
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// The closed set of fields one view accepts
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Vocabulary {
    /// View name, reported in errors
    pub view: &'static str,
    /// Field sorted on by default
    pub primary: &'static str,
    /// Fields in display order
    pub fields: &'static [FieldSpec],
}

impl Vocabulary {
    /// Describe a view's fields
    #[must_use]
    pub const fn new(
        view: &'static str,
        primary: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            view,
            primary,
            fields,
        }
    }

    /// Look up a field by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] when the name is not in the vocabulary.
    pub fn field(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::invalid_field(name, self.view))
    }

    /// The field sorted on by default
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the primary field was not declared.
    pub fn primary_field(&self) -> Result<&FieldSpec> {
        self.field(self.primary)
    }

    /// Field names in display order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

/// Content Performance table
pub const CONTENT: Vocabulary = Vocabulary::new(
    "content",
    "views",
    &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("category", "Category", FieldKind::Text),
        FieldSpec::new("status", "Status", FieldKind::Status),
        FieldSpec::new("views", "Views", FieldKind::Count),
        FieldSpec::new("shares", "Shares", FieldKind::Count),
        FieldSpec::new("comments", "Comments", FieldKind::Count),
        FieldSpec::new("engagement", "Engagement", FieldKind::Percentage),
    ],
);

/// Goal Tracking list
pub const GOALS: Vocabulary = Vocabulary::new(
    "goals",
    "progress",
    &[
        FieldSpec::new("name", "Goal", FieldKind::Text),
        FieldSpec::new("current", "Current", FieldKind::Count),
        FieldSpec::new("target", "Target", FieldKind::Count),
        FieldSpec::new("progress", "Progress", FieldKind::Percentage),
    ],
);

/// Real-Time Visitors location list
pub const LOCATIONS: Vocabulary = Vocabulary::new(
    "locations",
    "visitors",
    &[
        FieldSpec::new("country", "Country", FieldKind::Text),
        FieldSpec::new("visitors", "Visitors", FieldKind::Count),
        FieldSpec::new("percentage", "Share", FieldKind::Percentage),
    ],
);

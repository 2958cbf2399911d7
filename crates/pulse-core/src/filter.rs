//! Record filtering for the dashboard's filter panel

use crate::types::{FieldValue, Record};
use crate::vocabulary::{FieldKind, Vocabulary};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single predicate on one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// Case-insensitive substring match on a text field
    Contains {
        /// Text field to search
        field: String,
        /// Substring to look for
        needle: String,
    },
    /// Exact value match
    Equals {
        /// Field to compare
        field: String,
        /// Expected value
        value: FieldValue,
    },
    /// Numeric lower bound, inclusive
    AtLeast {
        /// Numeric field to compare
        field: String,
        /// Minimum value
        min: f64,
    },
}

impl Predicate {
    fn field(&self) -> &str {
        match self {
            Self::Contains { field, .. }
            | Self::Equals { field, .. }
            | Self::AtLeast { field, .. } => field,
        }
    }

    fn validate(&self, vocabulary: &Vocabulary) -> Result<()> {
        let spec = vocabulary.field(self.field())?;
        match self {
            Self::Contains { .. } if spec.kind != FieldKind::Text => Err(Error::validation(
                spec.name,
                "text search needs a text field",
            )),
            Self::Equals { value, .. } if !spec.kind.accepts(value) => Err(Error::validation(
                spec.name,
                format!(
                    "expected a {} value, got {}",
                    spec.kind.value_kind(),
                    value.kind_name()
                ),
            )),
            Self::AtLeast { min, .. } if !spec.kind.is_numeric() || min.is_nan() => Err(
                Error::validation(spec.name, "lower bound needs a numeric field and value"),
            ),
            _ => Ok(()),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Contains { field, needle } => record
                .get(field)
                .and_then(FieldValue::as_text)
                .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
            Self::Equals { field, value } => record.get(field) == Some(value),
            Self::AtLeast { field, min } => record
                .get(field)
                .and_then(FieldValue::as_number)
                .is_some_and(|n| n >= *min),
        }
    }
}

/// A conjunction of predicates; an empty filter keeps every record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    predicates: Vec<Predicate>,
}

impl RecordFilter {
    /// Filter that keeps everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records whose text `field` contains `needle`, ignoring case
    #[must_use]
    pub fn search(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Contains {
            field: field.into(),
            needle: needle.into(),
        });
        self
    }

    /// Keep records whose `field` equals `value`
    #[must_use]
    pub fn matching(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.predicates.push(Predicate::Equals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Keep records whose numeric `field` is at least `min`
    #[must_use]
    pub fn at_least(mut self, field: impl Into<String>, min: f64) -> Self {
        self.predicates.push(Predicate::AtLeast {
            field: field.into(),
            min,
        });
        self
    }

    /// The predicates making up this filter
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Whether the filter keeps every record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check every predicate against a vocabulary
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for unknown fields and
    /// [`Error::Validation`] when a predicate does not fit its field's kind.
    pub fn validate(&self, vocabulary: &Vocabulary) -> Result<()> {
        self.predicates
            .iter()
            .try_for_each(|predicate| predicate.validate(vocabulary))
    }

    /// Whether a record passes every predicate
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Keep the records that pass, preserving their order
    ///
    /// # Errors
    ///
    /// Same as [`RecordFilter::validate`].
    pub fn apply(&self, records: &[Record], vocabulary: &Vocabulary) -> Result<Vec<Record>> {
        self.validate(vocabulary)?;

        let kept: Vec<Record> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        debug!(
            view = vocabulary.view,
            predicates = self.predicates.len(),
            total = records.len(),
            kept = kept.len(),
            "Applied record filter"
        );

        Ok(kept)
    }
}

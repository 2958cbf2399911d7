//! Sortable, filterable table view
//!
//! A [`TableView`] owns the records of one dashboard widget together with
//! its selection and filter. Every read goes filter -> sort -> limit ->
//! format, and the source records are never reordered.

use crate::Result;
use crate::filter::RecordFilter;
use crate::format::{format_value, percentage_bar_width};
use crate::selection::{Selection, SortState};
use crate::sort::sort_by_state;
use crate::types::{FieldValue, Record, RecordId, SortDirection};
use crate::vocabulary::{FieldKind, Vocabulary};
use serde::Serialize;

/// Column header with the active sort marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Field name
    pub field: &'static str,
    /// Display label
    pub label: &'static str,
    /// Direction when this column is the active sort
    pub sorted: Option<SortDirection>,
}

impl Header {
    /// Label with an arrow appended on the active column
    #[must_use]
    pub fn title(&self) -> String {
        self.sorted.map_or_else(
            || self.label.to_string(),
            |direction| format!("{} {}", self.label, direction.arrow()),
        )
    }
}

/// A formatted cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Field the cell belongs to
    pub field: &'static str,
    /// Display text
    pub text: String,
    /// Clamped bar width for percentage fields
    pub bar: Option<f64>,
}

/// A formatted row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Identifier of the source record
    pub id: RecordId,
    /// Cells in vocabulary order
    pub cells: Vec<Cell>,
}

impl Row {
    /// Find a cell by field name
    #[must_use]
    pub fn cell(&self, field: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.field == field)
    }
}

/// One table widget's records and view state
#[derive(Debug, Clone)]
pub struct TableView {
    records: Vec<Record>,
    selection: Selection,
    filter: RecordFilter,
    limit: Option<usize>,
}

impl TableView {
    /// Create a view sorted on the vocabulary's primary field, descending
    #[must_use]
    pub fn new(vocabulary: Vocabulary, records: Vec<Record>) -> Self {
        Self {
            records,
            selection: Selection::new(vocabulary),
            filter: RecordFilter::new(),
            limit: None,
        }
    }

    /// Build a view from typed rows
    #[must_use]
    pub fn from_items<'a, T>(vocabulary: Vocabulary, items: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: 'a,
        Record: From<&'a T>,
    {
        Self::new(vocabulary, items.into_iter().map(Record::from).collect())
    }

    /// Cap the number of rows returned (`None` or zero shows all)
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|&n| n > 0);
        self
    }

    /// The view's vocabulary
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        self.selection.vocabulary()
    }

    /// Current sort state
    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        self.selection.state()
    }

    /// Click a column header
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidField`] for an unknown column.
    pub fn toggle(&mut self, field: &str) -> Result<&SortState> {
        self.selection.toggle(field)
    }

    /// Replace the active filter
    ///
    /// # Errors
    ///
    /// Returns an error if the filter does not fit the vocabulary; the
    /// previous filter stays active in that case.
    pub fn set_filter(&mut self, filter: RecordFilter) -> Result<()> {
        filter.validate(self.vocabulary())?;
        self.filter = filter;
        Ok(())
    }

    /// The source records, in the order they were supplied
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Filtered, sorted and limited records
    ///
    /// # Errors
    ///
    /// Returns an error if a record does not match its vocabulary.
    pub fn sorted(&self) -> Result<Vec<Record>> {
        let vocabulary = self.vocabulary();
        let filtered = self.filter.apply(&self.records, vocabulary)?;
        let mut sorted = sort_by_state(&filtered, vocabulary, self.sort_state())?;

        if let Some(limit) = self.limit {
            sorted.truncate(limit);
        }
        Ok(sorted)
    }

    /// Column headers, marking the active sort
    #[must_use]
    pub fn headers(&self) -> Vec<Header> {
        let state = self.sort_state();
        self.vocabulary()
            .fields
            .iter()
            .map(|spec| Header {
                field: spec.name,
                label: spec.label,
                sorted: (spec.name == state.field).then_some(state.direction),
            })
            .collect()
    }

    /// Formatted rows ready for display
    ///
    /// # Errors
    ///
    /// Same as [`TableView::sorted`].
    pub fn rows(&self) -> Result<Vec<Row>> {
        let fields = self.vocabulary().fields;
        Ok(self
            .sorted()?
            .iter()
            .map(|record| Row {
                id: record.id,
                cells: fields
                    .iter()
                    .map(|spec| {
                        let value = record.get(spec.name);
                        Cell {
                            field: spec.name,
                            text: value
                                .map(|v| format_value(spec.kind, v))
                                .unwrap_or_default(),
                            bar: match spec.kind {
                                FieldKind::Percentage => value
                                    .and_then(FieldValue::as_number)
                                    .map(percentage_bar_width),
                                _ => None,
                            },
                        }
                    })
                    .collect(),
            })
            .collect())
    }
}

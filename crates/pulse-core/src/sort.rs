//! Sort engine for record collections
//!
//! Sorting never touches the caller's slice: records are ordered through an
//! index permutation and cloned into a new vector. The sort is stable, so
//! records with equal keys keep their input order in either direction.

use crate::selection::SortState;
use crate::types::{FieldValue, Record, SortDirection};
use crate::vocabulary::{FieldSpec, Vocabulary};
use crate::{Error, Result};
use std::cmp::Ordering;
use tracing::debug;

/// Produce a new ordering of `records` by `field`.
///
/// # Errors
///
/// - [`Error::InvalidField`] if `field` is not in `vocabulary`
/// - [`Error::HeterogeneousTypeMismatch`] if any record lacks the field or
///   holds a value of a different kind than the vocabulary declares
pub fn sort_records(
    records: &[Record],
    vocabulary: &Vocabulary,
    field: &str,
    direction: SortDirection,
) -> Result<Vec<Record>> {
    let spec = vocabulary.field(field)?;
    let keys = extract_keys(records, spec)?;

    debug!(
        view = vocabulary.view,
        field,
        %direction,
        count = records.len(),
        "Sorting records"
    );

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = compare_keys(keys.get(a).copied(), keys.get(b).copied());
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    Ok(order
        .into_iter()
        .filter_map(|index| records.get(index).cloned())
        .collect())
}

/// Sort using a view's current selection
///
/// # Errors
///
/// Same as [`sort_records`].
pub fn sort_by_state(
    records: &[Record],
    vocabulary: &Vocabulary,
    state: &SortState,
) -> Result<Vec<Record>> {
    sort_records(records, vocabulary, &state.field, state.direction)
}

fn extract_keys<'a>(records: &'a [Record], spec: &FieldSpec) -> Result<Vec<&'a FieldValue>> {
    records
        .iter()
        .map(|record| match record.get(spec.name) {
            Some(value) if spec.kind.accepts(value) => Ok(value),
            found => Err(Error::HeterogeneousTypeMismatch {
                field: spec.name.to_string(),
                record: record.id.to_string(),
                expected: spec.kind.value_kind().to_string(),
                found: found.map_or("missing", FieldValue::kind_name).to_string(),
            }),
        })
        .collect()
}

fn compare_keys(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

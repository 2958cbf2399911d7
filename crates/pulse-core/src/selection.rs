//! Sort selection state for a single view

use crate::Result;
use crate::types::SortDirection;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The active (field, direction) pair driving table ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Field currently sorted on
    pub field: String,
    /// Direction of the sort
    pub direction: SortDirection,
}

/// Owned selection state, one per view instance
#[derive(Debug, Clone)]
pub struct Selection {
    vocabulary: Vocabulary,
    state: SortState,
}

impl Selection {
    /// Start on the vocabulary's primary metric, descending
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            state: SortState {
                field: vocabulary.primary.to_string(),
                direction: SortDirection::Descending,
            },
        }
    }

    /// Select a column.
    ///
    /// Re-selecting the active field flips the direction; selecting a new
    /// field makes it active with a descending sort.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidField`] for a field outside the
    /// vocabulary. The state is left unchanged in that case.
    pub fn toggle(&mut self, field: &str) -> Result<&SortState> {
        self.vocabulary.field(field)?;

        if self.state.field == field {
            self.state.direction = self.state.direction.toggled();
        } else {
            field.clone_into(&mut self.state.field);
            self.state.direction = SortDirection::Descending;
        }

        debug!(
            view = self.vocabulary.view,
            field = %self.state.field,
            direction = %self.state.direction,
            "Sort selection changed"
        );

        Ok(&self.state)
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> &SortState {
        &self.state
    }

    /// The vocabulary this selection is bound to
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::vocabulary::{CONTENT, GOALS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_primary_descending() {
        let selection = Selection::new(CONTENT);
        assert_eq!(selection.state().field, "views");
        assert_eq!(selection.state().direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let mut selection = Selection::new(CONTENT);
        let state = selection.toggle("views").unwrap();
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_double_toggle_restores_direction() {
        let mut selection = Selection::new(CONTENT);
        let original = selection.state().clone();

        selection.toggle("views").unwrap();
        selection.toggle("views").unwrap();

        assert_eq!(selection.state(), &original);
    }

    #[test]
    fn test_toggle_new_field_resets_to_descending() {
        let mut selection = Selection::new(CONTENT);
        selection.toggle("views").unwrap();
        assert_eq!(selection.state().direction, SortDirection::Ascending);

        let state = selection.toggle("shares").unwrap();
        assert_eq!(state.field, "shares");
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_invalid_field_leaves_state_untouched() {
        let mut selection = Selection::new(GOALS);
        let before = selection.state().clone();

        let err = selection.toggle("views").unwrap_err();
        assert!(matches!(err, Error::InvalidField { .. }));
        assert_eq!(selection.state(), &before);
    }
}

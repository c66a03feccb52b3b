//! Visible-list derivation.
//!
//! Composes the todo collection with the visibility filter. Owned by
//! neither component: callers recompute the visible list from the two
//! states after every transition.

use crate::filter::Filter;
use crate::types::{Todo, TodoState};

/// The todos the filter lets through, in insertion order
///
/// Lazy and order-preserving. With [`Filter::All`] this yields the whole
/// collection unchanged.
pub fn visible(collection: &TodoState, filter: Filter) -> impl Iterator<Item = &Todo> {
    collection.iter().filter(move |todo| filter.matches(todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use uuid::Uuid;

    fn fixture() -> TodoState {
        let todo = |n: u128, task: &str, complete: bool| Todo {
            id: TodoId::from_uuid(Uuid::from_u128(n)),
            task: task.to_string(),
            complete,
        };
        TodoState::from_todos(vec![
            todo(1, "Learn React", true),
            todo(2, "Learn Firebase", true),
            todo(3, "Learn GraphQL", false),
        ])
    }

    fn tasks(collection: &TodoState, filter: Filter) -> Vec<String> {
        visible(collection, filter)
            .map(|todo| todo.task.clone())
            .collect()
    }

    #[test]
    fn all_returns_collection_unchanged() {
        let state = fixture();
        let shown: Vec<&Todo> = visible(&state, Filter::All).collect();

        assert_eq!(shown.len(), state.len());
        assert!(shown.iter().zip(state.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn complete_returns_completed_subsequence() {
        assert_eq!(
            tasks(&fixture(), Filter::Complete),
            vec!["Learn React", "Learn Firebase"]
        );
    }

    #[test]
    fn incomplete_returns_incomplete_subsequence() {
        assert_eq!(tasks(&fixture(), Filter::Incomplete), vec!["Learn GraphQL"]);
    }

    #[test]
    fn empty_collection_is_empty_under_every_filter() {
        let state = TodoState::new();
        for filter in [Filter::All, Filter::Complete, Filter::Incomplete] {
            assert_eq!(visible(&state, filter).count(), 0);
        }
    }
}

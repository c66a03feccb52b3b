//! Visibility filter for the todo collection.
//!
//! The filter is a strict enumeration: setting it from text fails hard on
//! unrecognized values instead of falling back to a default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use todoflow_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

use crate::error::InvalidInput;
use crate::types::Todo;

/// Visibility rule applied to the todo collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Show every todo
    #[default]
    All,
    /// Show only completed todos
    Complete,
    /// Show only incomplete todos
    Incomplete,
}

impl Filter {
    /// Whether this filter lets the given todo through
    ///
    /// Pure predicate over the `complete` flag; todo identity plays no part.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Complete => todo.complete,
            Self::Incomplete => !todo.complete,
        }
    }
}

impl FromStr for Filter {
    type Err = InvalidInput;

    /// Parses the external filter values `ALL`, `COMPLETE`, and `INCOMPLETE`
    ///
    /// Anything else is rejected with [`InvalidInput::UnknownFilter`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "COMPLETE" => Ok(Self::Complete),
            "INCOMPLETE" => Ok(Self::Incomplete),
            other => Err(InvalidInput::UnknownFilter {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "ALL",
            Self::Complete => "COMPLETE",
            Self::Incomplete => "INCOMPLETE",
        };
        write!(f, "{name}")
    }
}

/// State of the visibility filter, defaulting to [`Filter::All`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    filter: Filter,
}

impl FilterState {
    /// Creates a filter state with the given filter
    #[must_use]
    pub const fn new(filter: Filter) -> Self {
        Self { filter }
    }

    /// Returns the current filter
    #[must_use]
    pub const fn filter(self) -> Filter {
        self.filter
    }

    /// Returns a new state with the given filter set
    ///
    /// The previous snapshot is untouched.
    #[must_use]
    pub const fn set(self, filter: Filter) -> Self {
        Self { filter }
    }
}

/// Actions for the filter state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAction {
    /// Set the visibility filter
    Set(Filter),
}

/// Reducer for the filter state
///
/// A pure state machine with no dependencies and no side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl FilterReducer {
    /// Creates a new `FilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FilterReducer {
    type State = FilterState;
    type Action = FilterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FilterAction::Set(filter) => {
                *state = state.set(filter);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}

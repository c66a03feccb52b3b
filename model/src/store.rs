//! Reducer surface for the todo collection.
//!
//! Wraps the pure snapshot transitions on [`TodoState`] in the
//! dispatch-an-action style consumed by a UI layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use todoflow_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};

use crate::types::{TodoId, TodoState};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh todo identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Actions for the todo collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo with the given task text
    Add {
        /// Text of the task
        task: String,
    },

    /// Mark a todo complete
    Complete {
        /// Todo to complete
        id: TodoId,
    },

    /// Mark a todo incomplete
    Uncomplete {
        /// Todo to uncomplete
        id: TodoId,
    },

    /// Flip a todo's completion
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },
}

/// Reducer for the todo collection
///
/// A pure state machine: every action resolves synchronously against the
/// collection and produces no side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { task } => {
                // Blank submissions are suppressed at the UI boundary; a
                // blank Add reaching the reducer leaves state untouched.
                if let Ok(next) = state.add(&task, env.ids.as_ref()) {
                    *state = next;
                }
            },
            TodoAction::Complete { id } => {
                *state = state.complete(&id);
            },
            TodoAction::Uncomplete { id } => {
                *state = state.uncomplete(&id);
            },
            TodoAction::Toggle { id } => {
                *state = state.toggle(&id);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}

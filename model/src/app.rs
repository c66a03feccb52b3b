//! Composed application state.
//!
//! The todo collection and the visibility filter never call each other;
//! this module is the one place they meet. It holds both states side by
//! side, routes actions to the owning child reducer, and derives the
//! visible list from the pair.

use serde::{Deserialize, Serialize};
use todoflow_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

use crate::filter::{FilterAction, FilterReducer, FilterState};
use crate::store::{TodoAction, TodoEnvironment, TodoReducer};
use crate::types::{Todo, TodoState};
use crate::view::visible;

/// Combined state of the todo collection and the visibility filter
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The todo collection
    pub todos: TodoState,
    /// The visibility filter
    pub filter: FilterState,
}

impl AppState {
    /// Creates an empty state with the default (show-all) filter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: TodoState::new(),
            filter: FilterState::new(crate::filter::Filter::All),
        }
    }

    /// The todos the current filter lets through, in insertion order
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        visible(&self.todos, self.filter.filter())
    }
}

/// Actions for the combined state, routed to the owning component
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// An action for the todo collection
    Todos(TodoAction),
    /// An action for the visibility filter
    Filter(FilterAction),
}

impl From<TodoAction> for AppAction {
    fn from(action: TodoAction) -> Self {
        Self::Todos(action)
    }
}

impl From<FilterAction> for AppAction {
    fn from(action: FilterAction) -> Self {
        Self::Filter(action)
    }
}

/// Reducer delegating to the todo and filter reducers
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer {
    todos: TodoReducer,
    filter: FilterReducer,
}

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: TodoReducer::new(),
            filter: FilterReducer::new(),
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // Both children are pure state machines; there are no child
        // effects to lift into AppAction.
        match action {
            AppAction::Todos(action) => {
                let _ = self.todos.reduce(&mut state.todos, action, env);
            },
            AppAction::Filter(action) => {
                let _ = self.filter.reduce(&mut state.filter, action, &());
            },
        }

        smallvec![Effect::None]
    }
}

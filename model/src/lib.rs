//! Todo and filter state-transition model.
//!
//! The library behind a todo-list UI: an ordered todo collection with
//! add/complete/uncomplete/toggle transitions, a strict visibility filter,
//! and the derivation of the visible list from the two. It demonstrates:
//!
//! - Pure snapshot transitions (previous state is never mutated)
//! - A reducer surface over the same transitions for dispatch-style callers
//! - Identifier generation as an injected capability
//! - Testing with `ReducerTest` and deterministic identifiers
//!
//! Rendering, event capture, and form handling are the caller's concern:
//! the UI layer dispatches an action, receives the new state, and redraws
//! from the visible list.
//!
//! # Quick Start
//!
//! ```
//! use todoflow_model::{
//!     AppAction, AppReducer, AppState, Filter, FilterAction, TodoAction, TodoEnvironment,
//! };
//! use todoflow_core::environment::UuidGenerator;
//! use todoflow_core::reducer::Reducer;
//! use std::sync::Arc;
//!
//! let env = TodoEnvironment::new(Arc::new(UuidGenerator));
//! let reducer = AppReducer::new();
//! let mut state = AppState::new();
//!
//! // Add a todo
//! reducer.reduce(
//!     &mut state,
//!     AppAction::Todos(TodoAction::Add { task: "Buy milk".to_string() }),
//!     &env,
//! );
//!
//! // Toggle it complete
//! let id = state.todos.todos()[0].id.clone();
//! reducer.reduce(&mut state, AppAction::Todos(TodoAction::Toggle { id }), &env);
//!
//! // Show only completed todos
//! reducer.reduce(
//!     &mut state,
//!     AppAction::Filter(FilterAction::Set(Filter::Complete)),
//!     &env,
//! );
//!
//! let shown: Vec<_> = state.visible().map(|todo| todo.task.as_str()).collect();
//! assert_eq!(shown, vec!["Buy milk"]);
//! ```

pub mod app;
pub mod error;
pub mod filter;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{AppAction, AppReducer, AppState};
pub use error::{InvalidInput, Result};
pub use filter::{Filter, FilterAction, FilterReducer, FilterState};
pub use store::{TodoAction, TodoEnvironment, TodoReducer};
pub use types::{Todo, TodoId, TodoState};
pub use view::visible;

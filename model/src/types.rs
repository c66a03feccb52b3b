//! Domain types for the todo model.
//!
//! A todo list is an ordered collection of todo items. All transitions are
//! pure: they leave the receiving snapshot untouched and return a new one.

use serde::{Deserialize, Serialize};
use todoflow_core::environment::IdGenerator;
use uuid::Uuid;

use crate::error::InvalidInput;

/// Unique identifier for a todo item
///
/// Opaque, immutable, and never reused. Production identifiers come from
/// the injected [`IdGenerator`] capability; tests supply deterministic ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the task
    pub task: String,
    /// Whether the task is complete
    pub complete: bool,
}

impl Todo {
    /// Creates a new, incomplete todo
    #[must_use]
    pub const fn new(id: TodoId, task: String) -> Self {
        Self {
            id,
            task,
            complete: false,
        }
    }
}

/// Ordered collection of todos
///
/// Insertion order is preserved; newly added todos append at the end.
/// The transitions ([`add`](Self::add), [`complete`](Self::complete),
/// [`uncomplete`](Self::uncomplete), [`toggle`](Self::toggle)) are pure
/// snapshot functions: the previous collection is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    todos: Vec<Todo>,
}

impl TodoState {
    /// Creates a new empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Creates a collection from existing todos, preserving their order
    #[must_use]
    pub const fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Iterates over the todos in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns a todo by identifier
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == *id)
    }

    /// Checks whether a todo with this identifier exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.complete).count()
    }

    /// Appends a new todo with a freshly generated identifier
    ///
    /// The new todo starts incomplete. The previous snapshot is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyTask`] if `task` is empty or
    /// whitespace-only.
    pub fn add(&self, task: &str, ids: &dyn IdGenerator) -> Result<Self, InvalidInput> {
        if task.trim().is_empty() {
            return Err(InvalidInput::EmptyTask);
        }

        let mut next = self.clone();
        next.todos
            .push(Todo::new(TodoId::from_uuid(ids.generate()), task.to_string()));
        Ok(next)
    }

    /// Marks the matching todo complete
    ///
    /// Unknown identifiers are a silent no-op: the returned snapshot is
    /// equivalent to the receiver.
    #[must_use]
    pub fn complete(&self, id: &TodoId) -> Self {
        self.map_todo(id, |todo| todo.complete = true)
    }

    /// Marks the matching todo incomplete
    ///
    /// Unknown identifiers are a silent no-op.
    #[must_use]
    pub fn uncomplete(&self, id: &TodoId) -> Self {
        self.map_todo(id, |todo| todo.complete = false)
    }

    /// Flips the completion of the matching todo
    ///
    /// Unknown identifiers are a silent no-op.
    #[must_use]
    pub fn toggle(&self, id: &TodoId) -> Self {
        self.map_todo(id, |todo| todo.complete = !todo.complete)
    }

    /// Clones the collection, applying `update` to the matching todo only
    fn map_todo(&self, id: &TodoId, update: impl FnOnce(&mut Todo)) -> Self {
        let mut next = self.clone();
        if let Some(todo) = next.todos.iter_mut().find(|todo| todo.id == *id) {
            update(todo);
        }
        next
    }
}

impl<'a> IntoIterator for &'a TodoState {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoflow_testing::SequentialIdGenerator;

    fn id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn todo_id_display() {
        let display = format!("{}", id(1));
        assert!(!display.is_empty());
    }

    #[test]
    fn todo_new_is_incomplete() {
        let todo = Todo::new(id(1), "Buy milk".to_string());
        assert_eq!(todo.task, "Buy milk");
        assert!(!todo.complete);
    }

    #[test]
    fn add_appends_incomplete_todo() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new();

        let next = state.add("Buy milk", &ids).unwrap();

        assert_eq!(next.len(), 1);
        let added = next.todos().last().unwrap();
        assert_eq!(added.task, "Buy milk");
        assert!(!added.complete);
        // Previous snapshot untouched
        assert!(state.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new()
            .add("first", &ids)
            .unwrap()
            .add("second", &ids)
            .unwrap()
            .add("third", &ids)
            .unwrap();

        let tasks: Vec<&str> = state.iter().map(|todo| todo.task.as_str()).collect();
        assert_eq!(tasks, vec!["first", "second", "third"]);
    }

    #[test]
    fn add_rejects_empty_task() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new();

        assert_eq!(state.add("", &ids), Err(InvalidInput::EmptyTask));
        assert_eq!(state.add("   ", &ids), Err(InvalidInput::EmptyTask));
        assert_eq!(ids.issued(), 0);
    }

    #[test]
    fn complete_sets_only_the_matching_todo() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new()
            .add("first", &ids)
            .unwrap()
            .add("second", &ids)
            .unwrap();
        let target = state.todos()[0].id.clone();

        let next = state.complete(&target);

        assert!(next.get(&target).unwrap().complete);
        assert!(!next.todos()[1].complete);
        // Previous snapshot untouched
        assert!(!state.get(&target).unwrap().complete);
    }

    #[test]
    fn uncomplete_clears_completion() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new().add("first", &ids).unwrap();
        let target = state.todos()[0].id.clone();

        let next = state.complete(&target).uncomplete(&target);

        assert!(!next.get(&target).unwrap().complete);
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new().add("first", &ids).unwrap();
        let target = state.todos()[0].id.clone();

        let once = state.toggle(&target);
        assert!(once.get(&target).unwrap().complete);

        let twice = once.toggle(&target);
        assert_eq!(twice, state);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new().add("first", &ids).unwrap();
        let missing = id(999);

        assert_eq!(state.complete(&missing), state);
        assert_eq!(state.uncomplete(&missing), state);
        assert_eq!(state.toggle(&missing), state);
    }

    #[test]
    fn completed_count_tracks_completions() {
        let ids = SequentialIdGenerator::new();
        let state = TodoState::new()
            .add("first", &ids)
            .unwrap()
            .add("second", &ids)
            .unwrap();
        assert_eq!(state.completed_count(), 0);

        let target = state.todos()[0].id.clone();
        assert_eq!(state.complete(&target).completed_count(), 1);
    }
}

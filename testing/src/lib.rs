//! # Todoflow Testing
//!
//! Testing utilities and helpers for the todoflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Assertion helpers for reducers
//! - A fluent Given-When-Then harness for reducer tests
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::{ReducerTest, assertions, sequential_ids};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(sequential_ids()))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { task: "Buy milk".to_string() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use todoflow_core::environment::IdGenerator;
use uuid::Uuid;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations for testing.
pub mod mocks {
    use super::{AtomicU64, IdGenerator, Ordering, Uuid};

    /// Sequential identifier generator for deterministic tests
    ///
    /// Produces the UUIDs `00000000-...-0001`, `00000000-...-0002`, and so
    /// on, making generated identifiers predictable and assertable.
    ///
    /// # Example
    ///
    /// ```
    /// use todoflow_testing::mocks::SequentialIdGenerator;
    /// use todoflow_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.generate(), Uuid::from_u128(1));
    /// assert_eq!(ids.generate(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first identifier is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }

        /// How many identifiers have been handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.next.load(Ordering::Relaxed)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Fixed identifier generator that always returns the same UUID
    ///
    /// Useful for tests that need to predict a single generated identifier.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedIdGenerator {
        id: Uuid,
    }

    impl FixedIdGenerator {
        /// Create a generator pinned to the given UUID
        #[must_use]
        pub const fn new(id: Uuid) -> Self {
            Self { id }
        }
    }

    impl IdGenerator for FixedIdGenerator {
        fn generate(&self) -> Uuid {
            self.id
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedIdGenerator, SequentialIdGenerator};

/// Create a shared sequential id generator for tests
#[must_use]
pub fn sequential_ids() -> Arc<SequentialIdGenerator> {
    Arc::new(SequentialIdGenerator::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_ordered_and_unique() {
        let ids = SequentialIdGenerator::new();
        let first = ids.generate();
        let second = ids.generate();

        assert_ne!(first, second);
        assert_eq!(first, Uuid::from_u128(1));
        assert_eq!(second, Uuid::from_u128(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn fixed_ids_repeat() {
        let pinned = Uuid::from_u128(42);
        let ids = FixedIdGenerator::new(pinned);

        assert_eq!(ids.generate(), pinned);
        assert_eq!(ids.generate(), pinned);
    }
}

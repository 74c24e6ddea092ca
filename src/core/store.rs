//! # Recipe Stores
//!
//! A `RecipeStore` is a cloneable handle to one feed list. Writers replace the
//! whole list; readers take snapshots or subscribe for change notifications.
//!
//! ```text
//! App (process lifetime)
//! └── popular: RecipeStore ──┬── HomeScreen #1   (replaces on fetch)
//!                            └── HomeScreen #2   (same list, after reload)
//!
//! HomeScreen (screen lifetime)
//! ├── newest: RecipeStore      // dropped with the screen
//! └── liveness: Liveness       // cleared on teardown
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::api::Recipe;

/// Shared, replace-only list of recipes.
#[derive(Clone, Debug)]
pub struct RecipeStore {
    tx: Arc<watch::Sender<Vec<Recipe>>>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let (tx, _rx) = watch::channel(recipes);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the whole list and wakes every subscriber.
    pub fn replace(&self, recipes: Vec<Recipe>) {
        self.tx.send_replace(recipes);
    }

    pub fn snapshot(&self) -> Vec<Recipe> {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Recipe> {
        self.tx.borrow().get(index).cloned()
    }

    /// Receiver that reports `has_changed()` after every `replace`.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Recipe>> {
        self.tx.subscribe()
    }

    /// True when both handles point at the same underlying list.
    pub fn same_store(&self, other: &RecipeStore) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

/// Per-activation flag checked before any fetch result is committed.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    /// A fresh flag starts active.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the owning screen as torn down. Irreversible.
    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }
}

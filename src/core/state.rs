//! # Application State
//!
//! Core business state for Emodo. This module contains domain data only -
//! no TUI-specific types. Presentation state (cursor, scroll, selection)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── todos: Vec<Todo>  // ordered list, insertion order = display order
//! └── next_id: u64      // monotonic id counter
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

/// A single todo entry. `text` is always the emoji-resolved string,
/// never the raw word the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}

pub struct App {
    /// Todos in insertion order. Insertion order is display order.
    pub todos: Vec<Todo>,
    /// Next id to hand out. Monotonic: ids stay unique across
    /// create/delete cycles, unlike a length-based scheme where
    /// "create 2, delete 1, create" would mint a duplicate.
    next_id: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next todo id and advance the counter.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

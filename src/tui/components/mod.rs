//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, mirroring React-style composition:
//!
//! - **Stateful, event-driven**: `InputBox` owns its text buffer and
//!   cursor; `TodoListState` owns scroll and selection. Both consume
//!   `TuiEvent`s and emit high-level events upward.
//! - **Transient render wrappers**: `TodoList` is built fresh each frame
//!   around the persistent state plus the todo slice as props.
//!
//! Each component file co-locates its state types, event types,
//! rendering logic, event handling, and tests.

mod input_box;
mod todo_list;

pub use input_box::{InputBox, InputEvent};
pub use todo_list::{TodoList, TodoListState};

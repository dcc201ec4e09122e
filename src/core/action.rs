//! # Actions
//!
//! Everything that can happen in Emodo becomes an `Action`.
//! User presses Enter on a known word? That's `Action::CreateTodo`.
//! User clicks a list entry? That's `Action::DeleteTodo(id)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect`. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::resolver::EmojiTable;
use crate::core::state::{App, Todo};

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a todo with the given (already emoji-resolved) text.
    /// Resolution happens before dispatch — see [`create_from_input`].
    CreateTodo(String),
    /// Remove every todo whose id matches.
    DeleteTodo(u64),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: applies an action to the state.
///
/// Pure over the state value — no I/O, no panics, no failure path.
/// Unknown ids fall through `retain` as a no-op.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CreateTodo(text) => {
            let id = app.allocate_id();
            app.todos.push(Todo { id, text });
            Effect::None
        }
        Action::DeleteTodo(id) => {
            app.todos.retain(|todo| todo.id != id);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// The creation gate: decides whether raw input becomes a todo.
///
/// Resolves the raw text through the emoji table; on a hit, dispatches
/// `CreateTodo` with the resolved glyph and returns true (the caller
/// should clear the input field). On a miss nothing happens at all —
/// no todo, no state change, no message — and the input stays put so
/// the user can correct it.
pub fn create_from_input(app: &mut App, table: &EmojiTable, raw: &str) -> bool {
    match table.resolve(raw) {
        Some(text) => {
            let text = text.to_string();
            update(app, Action::CreateTodo(text));
            true
        }
        None => {
            debug!("no emoji mapping for input {:?}, ignoring", raw);
            false
        }
    }
}

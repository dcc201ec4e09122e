//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core reducer stays free to be driven by any other adapter.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps in `poll` for up
//! to 500ms and only draws after an event arrived or state changed.
//! Nothing animates, so an idle app costs nothing.
//!
//! ## Interaction model
//!
//! Two modal input modes, toggled with Esc:
//!
//! - **Input**: keystrokes edit the input box; Enter submits the typed
//!   word through the resolver gate.
//! - **Cursor**: Up/Down move the list selection; Delete/Backspace/`d`
//!   delete the selected todo; `q` quits. Typing switches back to Input.
//!
//! Clicking a todo row deletes it in either mode, mirroring the
//! click-to-remove behavior of the list itself.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, create_from_input, update};
use crate::core::config::ResolvedConfig;
use crate::core::resolver::EmojiTable;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate todos with arrow keys. Typing auto-switches to Input.
    Cursor,
    /// Text editing in the input box. Esc switches to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub todo_list: TodoListState,
    pub input_box: InputBox,
    pub input_mode: InputMode,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            todo_list: TodoListState::new(),
            input_box: InputBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,   // Click-to-delete and hover highlighting
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Delete the todo at list index `idx` and re-clamp the selection.
fn delete_at(app: &mut App, tui: &mut TuiState, idx: usize) {
    let Some(todo) = app.todos.get(idx) else {
        return;
    };
    let id = todo.id;
    update(app, Action::DeleteTodo(id));

    tui.todo_list.selected_index = if app.todos.is_empty() {
        None
    } else {
        Some(idx.min(app.todos.len() - 1))
    };
    tui.todo_list.clamp_scroll(app.todos.len());
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let table = EmojiTable::with_custom(&config.mappings);
    info!("Emoji table ready with {} entries", table.len());

    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with TUI state
        tui.input_box.dimmed = matches!(tui.input_mode, InputMode::Cursor);

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Mouse hover — always active regardless of mode
            if let TuiEvent::MouseMove(_col, row) = event {
                let frame_area = terminal.get_frame().area();
                let scroll_offset = tui.todo_list.scroll_state.offset().y;
                tui.todo_list.selected_index =
                    ui::hit_test_todo(row, frame_area, scroll_offset, app.todos.len());
                continue;
            }

            // Mouse click — delete the clicked todo (the list's one
            // per-item interaction, matching click-to-remove)
            if let TuiEvent::MouseClick(_col, row) = event {
                let frame_area = terminal.get_frame().area();
                let scroll_offset = tui.todo_list.scroll_state.offset().y;
                if let Some(idx) =
                    ui::hit_test_todo(row, frame_area, scroll_offset, app.todos.len())
                {
                    delete_at(&mut app, &mut tui, idx);
                }
                continue;
            }

            // Scroll events — always go to the list regardless of mode
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.todo_list.handle_event(&event);
                tui.todo_list.clamp_scroll(app.todos.len());
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => match event {
                    // Esc → switch to Cursor mode, selecting the last todo
                    TuiEvent::Escape => {
                        tui.input_mode = InputMode::Cursor;
                        tui.todo_list.selected_index = if app.todos.is_empty() {
                            None
                        } else {
                            Some(app.todos.len() - 1)
                        };
                    }
                    // Up/Down jump straight into list navigation
                    TuiEvent::CursorUp => {
                        tui.input_mode = InputMode::Cursor;
                        tui.todo_list.select_prev(app.todos.len());
                    }
                    TuiEvent::CursorDown => {
                        tui.input_mode = InputMode::Cursor;
                        tui.todo_list.select_next(app.todos.len());
                    }
                    // InputBox handles everything else
                    _ => {
                        if let Some(InputEvent::Submit(raw)) = tui.input_box.handle_event(&event) {
                            // The gate: only a recognized word becomes a
                            // todo, and only then is the input cleared
                            if create_from_input(&mut app, &table, &raw) {
                                tui.input_box.clear();
                            }
                        }
                    }
                },
                InputMode::Cursor => match event {
                    // Esc in Cursor mode is a no-op
                    TuiEvent::Escape => {}
                    // q quits
                    TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    // Delete/Backspace/d remove the selected todo
                    TuiEvent::Delete | TuiEvent::Backspace | TuiEvent::InputChar('d') => {
                        if let Some(idx) = tui.todo_list.selected_index {
                            delete_at(&mut app, &mut tui, idx);
                        }
                    }
                    // Typing auto-switches to Input mode and forwards the event
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                        tui.input_mode = InputMode::Input;
                        tui.todo_list.selected_index = None;
                        tui.input_box.handle_event(&event);
                    }
                    // Enter switches back to Input mode
                    TuiEvent::Submit => {
                        tui.input_mode = InputMode::Input;
                        tui.todo_list.selected_index = None;
                    }
                    // Up/Down navigate todos
                    TuiEvent::CursorUp => tui.todo_list.select_prev(app.todos.len()),
                    TuiEvent::CursorDown => tui.todo_list.select_next(app.todos.len()),
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

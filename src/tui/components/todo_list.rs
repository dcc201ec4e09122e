//! # TodoList Component
//!
//! Scrollable ordered view of the todo list.
//!
//! ## Responsibilities
//!
//! - Display todos in insertion order, one row each
//! - Manage scrolling and keyboard selection
//! - Highlight the hovered/selected row (a click on a row deletes it,
//!   so the highlight doubles as a deletion target indicator)
//!
//! ## Architecture
//!
//! `TodoList` is a transient component (created each frame) that wraps
//! `&mut TodoListState` (persistent state) and the todo slice (props).
//! Rows are fixed-height (one terminal line per todo), which keeps the
//! scroll math trivial: content row == todo index.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::state::Todo;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use tui_scrollview::ScrollViewState;

/// Scroll and selection state for the todo list.
/// Must be persisted in the parent TuiState.
pub struct TodoListState {
    pub scroll_state: ScrollViewState,
    /// Currently highlighted row (mouse hover or keyboard navigation)
    pub selected_index: Option<usize>,
    /// Last known viewport height (for paging and scroll clamping)
    pub viewport_height: u16,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected_index: None,
            viewport_height: 0,
        }
    }

    fn set_scroll_y(&mut self, y: u16) {
        let x = self.scroll_state.offset().x;
        self.scroll_state.set_offset(Position { x, y });
    }

    /// Clamp scroll offset so it never runs past the last row.
    pub fn clamp_scroll(&mut self, todo_count: usize) {
        let max_y = (todo_count as u16).saturating_sub(self.viewport_height);
        if self.scroll_state.offset().y > max_y {
            self.set_scroll_y(max_y);
        }
    }

    /// Move selection up one row, clamped at the top.
    pub fn select_prev(&mut self, todo_count: usize) {
        if todo_count == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => todo_count - 1,
        });
        self.scroll_to_selected(todo_count);
    }

    /// Move selection down one row, clamped at the bottom.
    pub fn select_next(&mut self, todo_count: usize) {
        if todo_count == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(todo_count - 1),
            None => 0,
        });
        self.scroll_to_selected(todo_count);
    }

    /// Scroll the viewport so the selected row is visible.
    pub fn scroll_to_selected(&mut self, todo_count: usize) {
        let Some(idx) = self.selected_index else {
            return;
        };
        let row = idx as u16;
        let offset_y = self.scroll_state.offset().y;

        if row < offset_y {
            self.set_scroll_y(row);
        } else if self.viewport_height > 0 && row >= offset_y + self.viewport_height {
            self.set_scroll_y(row + 1 - self.viewport_height);
        }
        self.clamp_scroll(todo_count);
    }
}

impl EventHandler for TodoListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let offset_y = self.scroll_state.offset().y;
        match event {
            TuiEvent::ScrollUp => self.set_scroll_y(offset_y.saturating_sub(1)),
            TuiEvent::ScrollDown => self.set_scroll_y(offset_y.saturating_add(1)),
            TuiEvent::ScrollPageUp => {
                self.set_scroll_y(offset_y.saturating_sub(self.viewport_height.max(1)))
            }
            TuiEvent::ScrollPageDown => {
                self.set_scroll_y(offset_y.saturating_add(self.viewport_height.max(1)))
            }
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper: todo slice as props, persistent state borrowed.
pub struct TodoList<'a> {
    pub todos: &'a [Todo],
    pub state: &'a mut TodoListState,
    /// True when the list has keyboard focus (Cursor mode)
    pub focused: bool,
}

impl TodoList<'_> {
    fn row_style(&self, index: usize) -> Style {
        if self.state.selected_index == Some(index) {
            let style = Style::default().fg(Color::Cyan).bg(Color::DarkGray);
            if self.focused {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::Cyan)
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;

        if self.todos.is_empty() {
            let empty = Paragraph::new("No todos yet")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
            frame.render_widget(empty, area);
            return;
        }

        // One line per todo; leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let content_height = self.todos.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, todo) in self.todos.iter().enumerate() {
            let row = Rect::new(0, index as u16, content_width, 1);
            let line = Paragraph::new(Line::raw(todo.text.as_str())).style(self.row_style(index));
            scroll_view.render_widget(line, row);
        }

        self.state.clamp_scroll(self.todos.len());
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

//! # InputBox Component
//!
//! Single-line text field where the user types a word to add.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display the current buffer, or a placeholder when empty
//!
//! ## State Management
//!
//! The buffer is internal state. `dimmed` is a prop from the parent
//! (true while the list has keyboard focus). Submission does NOT clear
//! the buffer — the event loop clears it only when the typed word
//! actually resolves to an emoji, so a rejected word stays visible
//! for correction.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Add a new Todo";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter with non-blank content. Carries the raw
    /// buffer text; the buffer itself is left untouched.
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Single-line text input.
///
/// # Props
///
/// - `dimmed`: render de-emphasized (list has focus)
///
/// # State
///
/// - `buffer`: current text
/// - `cursor_pos`: byte offset into `buffer`, always on a char boundary
pub struct InputBox {
    pub buffer: String,
    pub dimmed: bool,
    cursor_pos: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor_pos: 0,
        }
    }

    /// Reset buffer and cursor. Called by the event loop after an
    /// accepted submission.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_pos = 0;
    }
}

/// Largest char boundary strictly before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut i = pos.saturating_sub(1);
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary strictly after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut i = pos + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.dimmed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Input");

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(style.add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str()).block(block).style(style)
        };

        frame.render_widget(input, area);

        // Terminal cursor inside the box, only while the input has focus
        if !self.dimmed {
            let col_offset = self.buffer[..self.cursor_pos].width() as u16;
            let cursor_x = (area.x + 1 + col_offset).min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: drop control characters from pastes
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor_pos, &clean);
                self.cursor_pos += clean.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    None
                } else {
                    Some(InputEvent::Submit(self.buffer.clone()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(!input.dimmed);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_respects_char_boundaries() {
        let mut input = InputBox::new();
        for c in "limón".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "limó");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "lim");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::InputChar('\n')), None);
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_paste_strips_control_chars() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("pi\nzza".to_string()));
        assert_eq!(input.buffer, "pizza");
    }

    #[test]
    fn test_submit_does_not_clear_buffer() {
        let mut input = InputBox::new();
        input.buffer = "pizza".to_string();

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("pizza".to_string())));
        assert_eq!(input.buffer, "pizza", "gate decides whether to clear");

        input.clear();
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);

        input.buffer = "   ".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_cursor_home_end() {
        let mut input = InputBox::new();
        for c in "abc".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.buffer, "xabc");
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('y'));
        assert_eq!(input.buffer, "xabcy");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Add a new Todo"));
    }

    #[test]
    fn test_render_shows_typed_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        for c in "sushi".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("sushi"));
        assert!(!text.contains("Add a new Todo"));
    }
}

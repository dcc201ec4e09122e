use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TodoList;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, list_area, input_area] = layout.areas(frame.area());

    // Title bar with a usage hint that matches the current state
    let title_text = if app.todos.is_empty() {
        String::from("Emoji Todo List | type a word, press Enter")
    } else {
        format!(
            "Emoji Todo List ({} todos) | click a row to remove it",
            app.todos.len()
        )
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Todo list
    let mut list = TodoList {
        todos: &app.todos,
        state: &mut tui.todo_list,
        focused: matches!(tui.input_mode, crate::tui::InputMode::Cursor),
    };
    list.render(frame, list_area);

    // Input box (drawn last so its cursor position wins)
    tui.input_box.render(frame, input_area);
}

/// Hit test: given a screen Y coordinate, find which todo row (if any)
/// is at that position. Rows are one line tall, so the math is
/// screen row → content row → index.
pub fn hit_test_todo(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    todo_count: usize,
) -> Option<usize> {
    use Constraint::{Length, Min};

    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [_title_area, list_area, _input_area] = layout.areas(frame_area);

    if screen_y < list_area.y || screen_y >= list_area.y + list_area.height {
        return None;
    }

    let content_y = (screen_y - list_area.y) + scroll_offset_y;
    let index = content_y as usize;
    (index < todo_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        update(&mut app, Action::CreateTodo("🍕".to_string()));
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Emoji Todo List (1 todos)"));
        assert!(text.contains("🍕"));
    }

    #[test]
    fn test_title_hints_at_typing_when_list_is_empty() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("type a word, press Enter"));
        assert!(!text.contains("todos)"));
    }

    #[test]
    fn test_hit_test_maps_rows_to_indices() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // List area is rows 1..21 (title takes row 0, input takes 3 rows)
        assert_eq!(hit_test_todo(1, frame_area, 0, 5), Some(0));
        assert_eq!(hit_test_todo(3, frame_area, 0, 5), Some(2));
        // Below the last todo
        assert_eq!(hit_test_todo(10, frame_area, 0, 5), None);
        // Title bar and input area never hit
        assert_eq!(hit_test_todo(0, frame_area, 0, 5), None);
        assert_eq!(hit_test_todo(22, frame_area, 0, 5), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let frame_area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test_todo(1, frame_area, 7, 30), Some(7));
        assert_eq!(hit_test_todo(5, frame_area, 7, 30), Some(11));
    }
}

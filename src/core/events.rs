// Event Handling
// Tab navigation events and the handler that derives them from terminal input

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Events the tab containers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// Select the previous tab (wraps)
    Previous,

    /// Select the next tab (wraps)
    Next,

    /// Jump to a zero-based position
    Jump(usize),

    /// Left click at a terminal cell
    Click { column: u16, row: u16 },

    /// Quit the application
    Quit,

    /// No operation
    None,
}

/// Event handler that converts terminal events to tab events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to a tab event
    pub fn handle(event: &Event) -> TabEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => TabEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: &KeyEvent) -> TabEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return TabEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => TabEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TabEvent::Quit,

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => TabEvent::Previous,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => TabEvent::Next,

            // 1-9 jump to a tab
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) if digit >= 1 => TabEvent::Jump(digit as usize - 1),
                _ => TabEvent::None,
            },

            _ => TabEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: &MouseEvent) -> TabEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => TabEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => TabEvent::None,
        }
    }
}

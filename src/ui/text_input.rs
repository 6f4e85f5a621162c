//! Single-line text input widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Character shown in place of each typed character of a masked input
const MASK_CHAR: char = '•';

/// A single-line input. The cursor is a character index, not a byte index.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
    placeholder: String,
    masked: bool,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Hide typed characters behind [`MASK_CHAR`]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to the end
    pub fn set_value(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        self.cursor_pos = self.char_len();
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Handle a key event, returns true if the value changed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor_pos);
                self.value.insert(at, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    self.cursor_pos -= 1;
                    let at = self.byte_index(self.cursor_pos);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor_pos < self.char_len() {
                    let at = self.byte_index(self.cursor_pos);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.char_len();
                false
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen, without the cursor
    pub fn display_text(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.char_len())
        } else {
            self.value.clone()
        }
    }

    /// Render the input
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text: Vec<char> = self.display_text().chars().collect();
            if focused {
                // Show cursor position
                text.insert(self.cursor_pos.min(text.len()), '|');
            }
            Line::from(text.into_iter().collect::<String>())
        };

        let para = Paragraph::new(content).style(Style::default().fg(if focused {
            Color::White
        } else {
            Color::Gray
        }));
        frame.render_widget(para, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_text_input_handles_chars() {
        let mut input = TextInput::new("Name");
        assert!(input.handle_key(KeyCode::Char('h')));
        assert!(input.handle_key(KeyCode::Char('i')));
        assert_eq!(input.value(), "hi");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = TextInput::new("Name");
        type_str(&mut input, "Ad");
        input.handle_key(KeyCode::Left);
        input.handle_key(KeyCode::Char('x'));
        assert_eq!(input.value(), "Axd");

        input.handle_key(KeyCode::Home);
        input.handle_key(KeyCode::Delete);
        assert_eq!(input.value(), "xd");

        input.handle_key(KeyCode::End);
        input.handle_key(KeyCode::Backspace);
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("Name");
        assert!(!input.handle_key(KeyCode::Backspace));
        assert!(!input.handle_key(KeyCode::Delete));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new("Name");
        type_str(&mut input, "Zoë");
        assert_eq!(input.cursor_pos(), 3);
        input.handle_key(KeyCode::Backspace);
        assert_eq!(input.value(), "Zo");
        input.handle_key(KeyCode::Left);
        input.handle_key(KeyCode::Char('é'));
        assert_eq!(input.value(), "Zéo");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new("Password").masked();
        type_str(&mut input, "abc");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.display_text(), "•••");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new("Email");
        input.set_value("a@b.com");
        assert_eq!(input.cursor_pos(), 7);
    }
}

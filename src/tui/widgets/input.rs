//! Text input widget
//!
//! A single-line text field with cursor support, used for the category name
//! field and the inline percentage/rename edits.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A simple text input state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; ASCII-safe for this app's fields)
    pub cursor: usize,
    /// Placeholder text shown when empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// What the content would be if `c` were inserted at the cursor
    pub fn preview_insert(&self, c: char) -> String {
        let mut preview = self.content.clone();
        preview.insert(self.cursor, c);
        preview
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor += next;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as a single line, with a block cursor when focused
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let line = self.to_line(focused);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Build the display line, with a block cursor when focused
    pub fn to_line(&self, focused: bool) -> Line<'static> {
        if self.content.is_empty() && !focused {
            return Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let value_style = Style::default().fg(Color::White);
        if !focused {
            return Line::from(Span::styled(self.content.clone(), value_style));
        }

        let cursor_pos = self.cursor.min(self.content.len());
        let (before, after) = self.content.split_at(cursor_pos);
        let cursor_char = after.chars().next().unwrap_or(' ');
        let rest = &after[cursor_char.len_utf8().min(after.len())..];

        Line::from(vec![
            Span::styled(before.to_string(), value_style),
            Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(rest.to_string(), value_style),
        ])
    }
}

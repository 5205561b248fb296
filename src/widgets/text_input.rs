use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::field::{FieldEvent, InputWidget, WidgetProps};

const SECURE_GLYPH: &str = "•";

/// Where a focus change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOrigin {
    Keyboard,
    Mouse,
    Programmatic,
}

/// Payload of the text input's focus and blur events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub origin: FocusOrigin,
}

impl FocusChange {
    pub fn keyboard() -> Self {
        Self {
            origin: FocusOrigin::Keyboard,
        }
    }

    pub fn programmatic() -> Self {
        Self {
            origin: FocusOrigin::Programmatic,
        }
    }
}

pub type TextInputEvent = FieldEvent<FocusChange, FocusChange>;

/// Props understood by [`TextInput`].
#[derive(Debug, Clone, Default)]
pub struct TextInputProps {
    pub label: String,
    pub placeholder: Option<String>,
    pub secure: bool,
}

impl TextInputProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Border and text styles keyed by the derived field state.
#[derive(Debug, Clone)]
pub struct TextInputStyle {
    pub idle: Style,
    pub focused: Style,
    pub invalid: Style,
    pub placeholder: Style,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            idle: Style::default().fg(Color::Gray),
            focused: Style::default().fg(Color::Cyan),
            invalid: Style::default().fg(Color::Red),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Single line terminal input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    style: TextInputStyle,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: TextInputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &TextInputStyle {
        &self.style
    }

    /// Translate a key press into the raw event the input raises, given the
    /// text it currently shows.
    pub fn handle_key(&self, current: &str, key: &KeyEvent) -> Option<TextInputEvent> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => Some(FieldEvent::Blur(FocusChange::keyboard())),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_event(current)
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return None;
                }
                let mut next = current.to_string();
                next.push(ch);
                Some(FieldEvent::ChangeText(next))
            }
            KeyCode::Backspace => {
                let mut next = current.to_string();
                next.pop()?;
                Some(FieldEvent::ChangeText(next))
            }
            KeyCode::Delete => clear_event(current),
            _ => None,
        }
    }
}

fn clear_event(current: &str) -> Option<TextInputEvent> {
    if current.is_empty() {
        None
    } else {
        Some(FieldEvent::ChangeText(String::new()))
    }
}

impl InputWidget for TextInput {
    type Props = TextInputProps;
    type FocusEvent = FocusChange;
    type BlurEvent = FocusChange;
    type Output = TextInputView;

    fn render(&self, props: WidgetProps<'_, TextInputProps>) -> TextInputView {
        let text = props.value.display_text();
        let shown = if props.props.secure {
            SECURE_GLYPH.repeat(text.chars().count())
        } else {
            text
        };

        let border = if !props.is_valid {
            self.style.invalid
        } else if props.is_focused {
            self.style.focused
        } else {
            self.style.idle
        };

        let mut title = props.props.label.clone();
        if !props.is_valid {
            title.push_str(" (invalid)");
        }

        let line = match (&props.props.placeholder, props.has_value) {
            (Some(placeholder), false) => {
                Line::from(Span::styled(placeholder.clone(), self.style.placeholder))
            }
            _ => Line::from(shown.clone()),
        };

        let cursor = if props.is_focused {
            let width = if props.has_value { shown.width() } else { 0 };
            Some(u16::try_from(width).unwrap_or(u16::MAX))
        } else {
            None
        };

        TextInputView {
            title,
            line,
            border,
            cursor,
        }
    }
}

/// Rendered form of a [`TextInput`].
#[derive(Debug, Clone)]
pub struct TextInputView {
    title: String,
    line: Line<'static>,
    border: Style,
    cursor: Option<u16>,
}

impl TextInputView {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn border_style(&self) -> Style {
        self.border
    }

    /// Plain text of the rendered line.
    pub fn text(&self) -> String {
        self.line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    /// Terminal cell for the cursor when drawn into `area`, if focused.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let offset = self.cursor?;
        let inner_x = area.x.saturating_add(1);
        let max_x = area.right().saturating_sub(2).max(inner_x);
        Some((inner_x.saturating_add(offset).min(max_x), area.y.saturating_add(1)))
    }
}

impl Widget for TextInputView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border)
            .title(self.title);
        Paragraph::new(self.line).block(block).render(area, buf);
    }
}

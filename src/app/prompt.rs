use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    domain::FieldValue,
    field::{FieldEvent, FieldProps, FieldSnapshot, FieldStateController, with_field_state},
    io::FieldConfig,
    widgets::{FocusChange, TextInput},
};

use super::{options::PromptOptions, status::StatusLine, terminal::TerminalGuard};

const VIEWPORT_HEIGHT: u16 = 4;

/// Result of a finished prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptOutcome {
    pub value: FieldValue,
    pub snapshot: FieldSnapshot,
    pub submitted: bool,
}

impl PromptOutcome {
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "value": self.value.to_json(),
            "is_valid": self.snapshot.is_valid,
            "has_value": self.snapshot.has_value,
            "submitted": self.submitted,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptStep {
    Continue,
    Submit,
    Cancel,
}

/// Interactive single field prompt built on a wrapped [`TextInput`].
pub struct FieldPrompt {
    controller: FieldStateController<TextInput>,
    options: PromptOptions,
    status: StatusLine,
}

impl FieldPrompt {
    pub fn new(props: FieldProps<TextInput>, options: PromptOptions) -> Self {
        let controller = with_field_state(TextInput::new())
            .with_options(options.controller.clone())
            .mount(props);
        Self {
            controller,
            options,
            status: StatusLine::default(),
        }
    }

    pub fn from_config(config: &FieldConfig, options: PromptOptions) -> Result<Self> {
        let controller_options = config
            .controller_options()
            .context("failed to build validators")?;
        let props = FieldProps::new(config.policy(), config.widget_props())
            .with_value(config.value.clone())
            .with_triggers(config.triggers());
        Ok(Self::new(
            props,
            options.with_controller_options(controller_options),
        ))
    }

    pub fn controller(&self) -> &FieldStateController<TextInput> {
        &self.controller
    }

    /// Run the prompt in the terminal until the value is submitted or the
    /// prompt is cancelled.
    pub fn run(mut self) -> Result<PromptOutcome> {
        let mut terminal = TerminalGuard::inline(VIEWPORT_HEIGHT)?;
        self.focus(FocusChange::programmatic());
        let submitted = loop {
            terminal
                .draw(|frame| self.draw(frame))
                .context("failed to draw frame")?;

            if !event::poll(self.options.tick_rate).context("failed to poll events")? {
                continue;
            }
            let Event::Key(key) = event::read().context("failed to read event")? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match self.handle_key(key) {
                PromptStep::Continue => {}
                PromptStep::Submit => break true,
                PromptStep::Cancel => break false,
            }
        };
        drop(terminal);
        Ok(self.finish(submitted))
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Esc => return PromptStep::Cancel,
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::BackTab if !self.controller.is_focused() => {
                self.focus(FocusChange::keyboard());
                return PromptStep::Continue;
            }
            _ => {}
        }
        if !self.controller.is_focused() {
            return PromptStep::Continue;
        }
        let current = self.controller.props().value.display_text();
        if let Some(event) = self.controller.handle_key(&current, &key) {
            self.apply(event);
        }
        PromptStep::Continue
    }

    pub(crate) fn finish(self, submitted: bool) -> PromptOutcome {
        PromptOutcome {
            value: self.controller.value().clone(),
            snapshot: self.controller.snapshot(),
            submitted,
        }
    }

    fn submit(&mut self) -> PromptStep {
        if self.controller.is_focused() {
            self.apply(FieldEvent::Blur(FocusChange::keyboard()));
        }
        if self.controller.is_valid() || self.options.allow_invalid {
            return PromptStep::Submit;
        }
        debug!("rejected invalid submission");
        self.focus(FocusChange::programmatic());
        self.status.rejected();
        PromptStep::Continue
    }

    fn focus(&mut self, change: FocusChange) {
        self.apply(FieldEvent::Focus(change));
    }

    fn apply(&mut self, event: FieldEvent<FocusChange, FocusChange>) {
        match event {
            FieldEvent::ChangeText(text) => {
                self.controller.on_change_text(&text);
                self.controller.props_mut().value = FieldValue::text(text);
                self.status.ready();
            }
            FieldEvent::Focus(change) => {
                self.controller.on_focus(&change);
                self.status.ready();
            }
            FieldEvent::Blur(change) => {
                self.controller.on_blur(&change);
                self.status.blurred();
            }
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(frame.area());

        let view = self.controller.render();
        let cursor = view.cursor_position(chunks[0]);
        frame.render_widget(view, chunks[0]);
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }

        if self.options.show_help {
            let status = Paragraph::new(self.status.message().to_string())
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(status, chunks[1]);
        }
    }

    #[cfg(test)]
    pub(crate) fn status_message(&self) -> &str {
        self.status.message()
    }
}

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::Serialize;
use tracing::debug;

use crate::domain::FieldValue;

use super::{
    options::ControllerOptions,
    props::FieldProps,
    widget::{InputWidget, WidgetProps},
};

/// Wrap `widget` so it gains focus, value and validity tracking.
pub fn with_field_state<W: InputWidget>(widget: W) -> WithFieldState<W> {
    WithFieldState {
        widget,
        options: ControllerOptions::default(),
    }
}

/// A widget wrapped by [`with_field_state`], ready to be mounted.
#[derive(Debug, Clone)]
pub struct WithFieldState<W> {
    widget: W,
    options: ControllerOptions,
}

impl<W: InputWidget> WithFieldState<W> {
    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn mount(self, props: FieldProps<W>) -> FieldStateController<W> {
        FieldStateController::mount(self.widget, props, self.options)
    }
}

/// Raw event raised by a wrapped widget.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent<F, B> {
    Focus(F),
    Blur(B),
    ChangeText(String),
}

/// Derived state exposed to the wrapped widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub is_focused: bool,
    pub is_valid: bool,
    pub has_value: bool,
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Start,
    Change,
    Blur,
    Manual,
}

#[derive(Debug)]
struct FieldState {
    value: FieldValue,
    is_focused: bool,
    is_valid: bool,
}

/// A mounted field: one wrapped widget plus its private state.
///
/// Dereferences to the wrapped widget, so a reference to the mounted
/// instance addresses the widget itself.
pub struct FieldStateController<W: InputWidget> {
    widget: W,
    props: FieldProps<W>,
    options: ControllerOptions,
    state: FieldState,
}

impl<W: InputWidget> FieldStateController<W> {
    pub fn mount(widget: W, props: FieldProps<W>, options: ControllerOptions) -> Self {
        let state = FieldState {
            value: props.value.clone(),
            is_focused: false,
            is_valid: true,
        };
        let mut controller = Self {
            widget,
            props,
            options,
            state,
        };
        if controller.props.triggers.validate_on_start {
            let initial = controller.state.value.clone();
            controller.run_validation(&initial, Trigger::Start);
        }
        controller
    }

    pub fn render(&self) -> W::Output {
        self.widget.render(WidgetProps {
            props: &self.props.widget,
            value: &self.props.value,
            is_focused: self.state.is_focused,
            is_valid: self.state.is_valid,
            has_value: self.has_value(),
        })
    }

    pub fn on_focus(&mut self, event: &W::FocusEvent) {
        self.state.is_focused = true;
        if let Some(handler) = self.props.on_focus.as_mut() {
            handler(event);
        }
    }

    pub fn on_blur(&mut self, event: &W::BlurEvent) {
        self.state.is_focused = false;
        if let Some(handler) = self.props.on_blur.as_mut() {
            handler(event);
        }
        if self.props.triggers.validate_on_blur {
            let current = self.state.value.clone();
            self.run_validation(&current, Trigger::Blur);
        }
    }

    pub fn on_change_text(&mut self, text: &str) {
        self.state.value = FieldValue::text(text);
        if let Some(handler) = self.props.on_change_text.as_mut() {
            handler(text);
        }
        if self.props.triggers.validate_on_change {
            self.run_validation(&FieldValue::text(text), Trigger::Change);
        }
    }

    pub fn dispatch(&mut self, event: FieldEvent<W::FocusEvent, W::BlurEvent>) {
        match event {
            FieldEvent::Focus(event) => self.on_focus(&event),
            FieldEvent::Blur(event) => self.on_blur(&event),
            FieldEvent::ChangeText(text) => self.on_change_text(&text),
        }
    }

    /// Validate the tracked value now, regardless of the trigger flags.
    pub fn validate_field(&mut self) -> bool {
        let current = self.state.value.clone();
        self.run_validation(&current, Trigger::Manual)
    }

    /// Replace the props. Tracked state is kept and nothing is validated.
    pub fn set_props(&mut self, props: FieldProps<W>) {
        self.props = props;
    }

    /// Edit the props in place. Tracked state is kept and nothing is validated.
    pub fn props_mut(&mut self) -> &mut FieldProps<W> {
        &mut self.props
    }

    pub fn props(&self) -> &FieldProps<W> {
        &self.props
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn value(&self) -> &FieldValue {
        &self.state.value
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid
    }

    pub fn has_value(&self) -> bool {
        !self.state.value.is_empty()
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            is_focused: self.state.is_focused,
            is_valid: self.state.is_valid,
            has_value: self.has_value(),
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Tear the instance down and hand back the wrapped widget. No
    /// validation runs and no handler is invoked.
    pub fn unmount(self) -> W {
        self.widget
    }

    fn run_validation(&mut self, candidate: &FieldValue, trigger: Trigger) -> bool {
        let is_valid = self.options.registry.evaluate(
            &self.props.validate,
            candidate,
            self.options.unknown_validator,
        );
        debug!(?trigger, is_valid, "validated field");
        self.state.is_valid = is_valid;
        is_valid
    }
}

impl<W: InputWidget> Deref for FieldStateController<W> {
    type Target = W;

    fn deref(&self) -> &Self::Target {
        &self.widget
    }
}

impl<W: InputWidget> DerefMut for FieldStateController<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.widget
    }
}

impl<W> fmt::Debug for FieldStateController<W>
where
    W: InputWidget + fmt::Debug,
    W::Props: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldStateController")
            .field("widget", &self.widget)
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}

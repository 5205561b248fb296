use std::fmt;

use crate::domain::{FieldValue, TriggerFlags, ValidationPolicy};

use super::widget::InputWidget;

/// Caller handler receiving a widget event payload.
pub type EventHandler<E> = Box<dyn FnMut(&E)>;

/// Caller handler receiving the new text of a change event.
pub type TextHandler = Box<dyn FnMut(&str)>;

/// Props accepted by a wrapped widget: the validation configuration, the
/// standard input props and the widget's own props.
pub struct FieldProps<W: InputWidget> {
    pub validate: ValidationPolicy,
    pub triggers: TriggerFlags,
    pub value: FieldValue,
    pub on_focus: Option<EventHandler<W::FocusEvent>>,
    pub on_blur: Option<EventHandler<W::BlurEvent>>,
    pub on_change_text: Option<TextHandler>,
    pub widget: W::Props,
}

impl<W: InputWidget> FieldProps<W> {
    pub fn new(validate: impl Into<ValidationPolicy>, widget: W::Props) -> Self {
        Self {
            validate: validate.into(),
            triggers: TriggerFlags::default(),
            value: FieldValue::unset(),
            on_focus: None,
            on_blur: None,
            on_change_text: None,
            widget,
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_triggers(mut self, triggers: TriggerFlags) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn validate_on_start(mut self, enabled: bool) -> Self {
        self.triggers.validate_on_start = enabled;
        self
    }

    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.triggers.validate_on_change = enabled;
        self
    }

    pub fn validate_on_blur(mut self, enabled: bool) -> Self {
        self.triggers.validate_on_blur = enabled;
        self
    }

    pub fn on_focus(mut self, handler: impl FnMut(&W::FocusEvent) + 'static) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut(&W::BlurEvent) + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }

    pub fn on_change_text(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change_text = Some(Box::new(handler));
        self
    }
}

impl<W> fmt::Debug for FieldProps<W>
where
    W: InputWidget,
    W::Props: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldProps")
            .field("validate", &self.validate)
            .field("triggers", &self.triggers)
            .field("value", &self.value)
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_change_text", &self.on_change_text.is_some())
            .field("widget", &self.widget)
            .finish()
    }
}

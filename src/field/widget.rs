use crate::domain::FieldValue;

/// Capability a widget needs to be wrapped by a
/// [`FieldStateController`](super::FieldStateController).
///
/// The widget raises focus, blur and change-text events through its host;
/// the host routes them to the controller, which renders the widget again
/// with the derived state. Widgets are free to ignore any of the derived
/// flags.
pub trait InputWidget {
    /// The widget's own props, passed through untouched.
    type Props;
    /// Payload carried by a focus event.
    type FocusEvent;
    /// Payload carried by a blur event.
    type BlurEvent;
    /// What a render produces.
    type Output;

    fn render(&self, props: WidgetProps<'_, Self::Props>) -> Self::Output;
}

/// Props handed to the wrapped widget on every render.
#[derive(Debug)]
pub struct WidgetProps<'a, P> {
    pub props: &'a P,
    /// The caller's `value` prop. Never replaced by the tracked value.
    pub value: &'a FieldValue,
    pub is_focused: bool,
    pub is_valid: bool,
    pub has_value: bool,
}

impl<P> Clone for WidgetProps<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for WidgetProps<'_, P> {}

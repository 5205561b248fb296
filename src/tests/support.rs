use std::{
    cell::Cell,
    sync::{Arc, Mutex},
};

use crate::{FieldValue, InputWidget, WidgetProps};

/// Widget that hands back everything it was rendered with.
#[derive(Debug, Default)]
pub(crate) struct ProbeWidget {
    pub(crate) renders: Cell<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rendered {
    pub(crate) label: String,
    pub(crate) value: FieldValue,
    pub(crate) is_focused: bool,
    pub(crate) is_valid: bool,
    pub(crate) has_value: bool,
}

impl InputWidget for ProbeWidget {
    type Props = String;
    type FocusEvent = u32;
    type BlurEvent = u32;
    type Output = Rendered;

    fn render(&self, props: WidgetProps<'_, String>) -> Rendered {
        self.renders.set(self.renders.get() + 1);
        Rendered {
            label: props.props.clone(),
            value: props.value.clone(),
            is_focused: props.is_focused,
            is_valid: props.is_valid,
            has_value: props.has_value,
        }
    }
}

/// Shared log that handlers and predicates append to.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

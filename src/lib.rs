#![deny(rust_2018_idioms)]
//! Focus, value and validation state for input widgets.
//!
//! [`with_field_state`] wraps any [`InputWidget`] in a
//! [`FieldStateController`] that tracks whether the field is focused, whether
//! it holds a value and whether its value passed the configured
//! [`ValidationPolicy`]. The widget only renders the derived flags it is
//! handed; validation rules live in the policy or in a
//! [`ValidatorRegistry`].

mod app;
mod domain;
mod field;
mod io;
pub mod registry;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::{FieldPrompt, PromptOptions, PromptOutcome};
pub use domain::{FieldValue, Predicate, TriggerFlags, ValidationPolicy};
pub use field::{
    ControllerOptions, EventHandler, FieldEvent, FieldProps, FieldSnapshot, FieldStateController,
    InputWidget, TextHandler, WidgetProps, WithFieldState, with_field_state,
};
pub use io::{
    DocumentFormat, FieldConfig, PolicyConfig, load_document, load_field_config,
    parse_document_any, parse_document_str,
};
pub use registry::{RegistryError, UnknownValidator, ValidatorRegistry};

pub mod prelude {
    pub use super::{
        FieldProps, FieldStateController, InputWidget, TriggerFlags, ValidationPolicy,
        WidgetProps, with_field_state,
    };
}

mod controller;
mod options;
mod props;
mod widget;

pub use controller::{
    FieldEvent, FieldSnapshot, FieldStateController, WithFieldState, with_field_state,
};
pub use options::ControllerOptions;
pub use props::{EventHandler, FieldProps, TextHandler};
pub use widget::{InputWidget, WidgetProps};

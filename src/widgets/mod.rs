mod text_input;

pub use text_input::{
    FocusChange, FocusOrigin, TextInput, TextInputEvent, TextInputProps, TextInputStyle,
    TextInputView,
};

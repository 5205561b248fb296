mod options;
mod prompt;
mod status;
mod terminal;

pub use options::PromptOptions;
pub use prompt::{FieldPrompt, PromptOutcome};
#[cfg(test)]
pub(crate) use prompt::PromptStep;

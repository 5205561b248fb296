use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use crate::{
    FieldConfig, FieldPrompt, FieldProps, FieldValue, PromptOptions, app::PromptStep,
    widgets::{TextInput, TextInputProps},
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(prompt: &mut FieldPrompt, text: &str) {
    for ch in text.chars() {
        assert_eq!(prompt.handle_key(key(KeyCode::Char(ch))), PromptStep::Continue);
    }
}

fn email_prompt(options: PromptOptions) -> FieldPrompt {
    let props = FieldProps::<TextInput>::new("email", TextInputProps::new("Email"))
        .validate_on_blur(true);
    let mut prompt = FieldPrompt::new(props, options);
    prompt_focus(&mut prompt);
    prompt
}

fn prompt_focus(prompt: &mut FieldPrompt) {
    // The prompt starts blurred until the terminal loop focuses it.
    assert_eq!(prompt.handle_key(key(KeyCode::Tab)), PromptStep::Continue);
    assert!(prompt.controller().is_focused());
}

#[test]
fn typing_updates_tracked_and_controlled_value() {
    let mut prompt = email_prompt(PromptOptions::default());
    type_text(&mut prompt, "ab");
    prompt.handle_key(key(KeyCode::Backspace));
    assert_eq!(prompt.controller().value(), &FieldValue::text("a"));
    assert_eq!(prompt.controller().props().value, FieldValue::text("a"));
}

#[test]
fn invalid_submission_is_rejected_and_refocused() {
    let mut prompt = email_prompt(PromptOptions::default());
    type_text(&mut prompt, "nope");
    assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptStep::Continue);
    assert!(!prompt.controller().is_valid());
    assert!(prompt.controller().is_focused());
    assert!(prompt.status_message().contains("invalid"));
}

#[test]
fn valid_submission_finishes_the_prompt() {
    let mut prompt = email_prompt(PromptOptions::default());
    type_text(&mut prompt, "dev@example.com");
    assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptStep::Submit);
    let outcome = prompt.finish(true);
    assert!(outcome.snapshot.is_valid);
    assert!(!outcome.snapshot.is_focused);
    assert_eq!(
        outcome.to_json(),
        json!({"value": "dev@example.com", "is_valid": true, "has_value": true, "submitted": true})
    );
}

#[test]
fn allow_invalid_submits_anyway() {
    let mut prompt = email_prompt(PromptOptions::default().with_allow_invalid(true));
    type_text(&mut prompt, "nope");
    assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptStep::Submit);
    assert!(!prompt.finish(true).snapshot.is_valid);
}

#[test]
fn keys_are_ignored_while_blurred() {
    let mut prompt = email_prompt(PromptOptions::default());
    assert_eq!(prompt.handle_key(key(KeyCode::Tab)), PromptStep::Continue);
    assert!(!prompt.controller().is_focused());
    type_text(&mut prompt, "zz");
    assert!(prompt.controller().value().is_unset());
    assert_eq!(prompt.handle_key(key(KeyCode::Esc)), PromptStep::Cancel);
}

#[test]
fn prompts_build_from_config_documents() {
    let config = FieldConfig::from_value(json!({
        "label": "Port",
        "value": "80",
        "validate": "port",
        "validate_on_start": true,
        "validate_on_change": true,
        "schemas": {"port": {"type": "integer", "minimum": 1024}}
    }))
    .unwrap();
    let mut prompt = FieldPrompt::from_config(&config, PromptOptions::default()).unwrap();
    assert!(!prompt.controller().is_valid());
    prompt.handle_key(key(KeyCode::Tab));
    type_text(&mut prompt, "80");
    assert_eq!(prompt.controller().value(), &FieldValue::text("8080"));
    assert!(prompt.controller().is_valid());
    let view = prompt.controller().render();
    assert_eq!(view.title(), "Port");
    assert_eq!(view.text(), "8080");
}

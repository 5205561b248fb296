use std::{cell::Cell, rc::Rc};

use crate::{
    ControllerOptions, FieldEvent, FieldProps, FieldValue, UnknownValidator, ValidationPolicy,
    ValidatorRegistry, tests::support::{CallLog, ProbeWidget}, with_field_state,
};

fn props(validate: impl Into<ValidationPolicy>) -> FieldProps<ProbeWidget> {
    FieldProps::new(validate, "name".to_string())
}

fn logging_policy(log: &CallLog) -> ValidationPolicy {
    let log = log.clone();
    ValidationPolicy::predicate(move |value| {
        log.push(format!("validate:{}", value.display_text()));
        value.display_text().len() == 3
    })
}

#[test]
fn change_handler_runs_before_validation() {
    let log = CallLog::default();
    let handler_log = log.clone();
    let mut field = with_field_state(ProbeWidget::default()).mount(
        props(logging_policy(&log))
            .validate_on_change(true)
            .on_change_text(move |text| handler_log.push(format!("handler:{text}"))),
    );
    field.on_change_text("abc");
    assert_eq!(log.entries(), vec!["handler:abc", "validate:abc"]);
    assert!(field.is_valid());
}

#[test]
fn blur_handler_runs_before_blur_validation() {
    let log = CallLog::default();
    let handler_log = log.clone();
    let mut field = with_field_state(ProbeWidget::default()).mount(
        props(logging_policy(&log))
            .with_value("ab")
            .validate_on_blur(true)
            .on_blur(move |event| handler_log.push(format!("blur:{event}"))),
    );
    field.on_focus(&1);
    field.on_blur(&7);
    assert_eq!(log.entries(), vec!["blur:7", "validate:ab"]);
    assert!(!field.is_valid());
}

#[test]
fn handlers_fire_once_per_event_with_the_same_arguments() {
    let focus_calls = Rc::new(Cell::new(0u32));
    let seen = Rc::new(Cell::new(0u32));
    let (calls, last) = (Rc::clone(&focus_calls), Rc::clone(&seen));
    let mut field = with_field_state(ProbeWidget::default()).mount(props("required").on_focus(
        move |event| {
            calls.set(calls.get() + 1);
            last.set(*event);
        },
    ));
    field.on_focus(&42);
    assert_eq!(focus_calls.get(), 1);
    assert_eq!(seen.get(), 42);
    field.on_blur(&0);
    field.on_focus(&43);
    assert_eq!(focus_calls.get(), 2);
    assert_eq!(seen.get(), 43);
}

#[test]
fn focus_never_validates() {
    let log = CallLog::default();
    let mut field = with_field_state(ProbeWidget::default()).mount(
        props(logging_policy(&log))
            .validate_on_change(true)
            .validate_on_blur(false),
    );
    field.on_focus(&1);
    assert!(log.entries().is_empty());
    assert!(field.is_focused());
}

#[test]
fn change_validation_uses_event_text_not_the_value_prop() {
    let mut field = with_field_state(ProbeWidget::default()).mount(
        props(ValidationPolicy::predicate(|value| value.as_str() == Some("new")))
            .with_value("old")
            .validate_on_change(true),
    );
    field.on_change_text("new");
    assert!(field.is_valid());
    assert_eq!(field.value(), &FieldValue::text("new"));
    assert_eq!(field.props().value, FieldValue::text("old"));
}

#[test]
fn render_passes_through_the_value_prop() {
    let mut field = with_field_state(ProbeWidget::default()).mount(props("required").with_value("seed"));
    field.on_change_text("");
    let rendered = field.render();
    assert_eq!(rendered.label, "name");
    assert_eq!(rendered.value, FieldValue::text("seed"));
    assert!(!rendered.has_value);
    assert!(rendered.is_valid);
}

#[test]
fn new_policy_applies_without_revalidating() {
    let mut field = with_field_state(ProbeWidget::default())
        .mount(props("required").with_value("").validate_on_blur(true));
    assert!(field.is_valid());

    field.set_props(props(ValidationPolicy::predicate(|_| false)).validate_on_blur(true));
    assert!(field.is_valid());

    field.on_blur(&0);
    assert!(!field.is_valid());
}

#[test]
fn start_validation_is_not_repeated_on_new_props() {
    let log = CallLog::default();
    let mut field = with_field_state(ProbeWidget::default())
        .mount(props(logging_policy(&log)).with_value("abc").validate_on_start(true));
    assert_eq!(log.entries(), vec!["validate:abc"]);
    field.set_props(props(logging_policy(&log)).validate_on_start(true));
    field.props_mut().value = FieldValue::text("zz");
    let _ = field.render();
    assert_eq!(log.entries(), vec!["validate:abc"]);
    assert_eq!(field.value(), &FieldValue::text("abc"));
}

#[test]
fn dispatch_routes_raw_events() {
    let mut field = with_field_state(ProbeWidget::default())
        .mount(props("required").validate_on_change(true));
    field.dispatch(FieldEvent::Focus(1));
    assert!(field.is_focused());
    field.dispatch(FieldEvent::ChangeText(String::new()));
    assert!(!field.is_valid());
    field.dispatch(FieldEvent::ChangeText("x".to_string()));
    assert!(field.is_valid());
    field.dispatch(FieldEvent::Blur(1));
    assert!(!field.is_focused());
}

#[test]
fn unknown_names_follow_the_configured_fallback() {
    let mut lenient = with_field_state(ProbeWidget::default())
        .mount(props("does-not-exist").validate_on_start(true));
    assert!(lenient.is_valid());
    lenient.on_change_text("x");
    assert!(lenient.validate_field());

    let strict = with_field_state(ProbeWidget::default())
        .with_options(ControllerOptions::default().strict())
        .mount(props("does-not-exist").validate_on_start(true));
    assert!(!strict.is_valid());
    assert_eq!(strict.options().unknown_validator, UnknownValidator::Invalid);
}

#[test]
fn caller_registries_replace_the_shared_one() {
    let mut registry = ValidatorRegistry::new();
    registry.register("even", |value| {
        value
            .display_text()
            .parse::<u32>()
            .map(|n| n % 2 == 0)
            .unwrap_or(false)
    });
    let mut field = with_field_state(ProbeWidget::default())
        .with_options(ControllerOptions::default().with_registry(registry))
        .mount(props("even").validate_on_change(true));
    field.on_change_text("4");
    assert!(field.is_valid());
    field.on_change_text("5");
    assert!(!field.is_valid());
    assert!(!field.options().registry().contains("required"));
}

#[test]
fn instance_reference_reaches_the_wrapped_widget() {
    let field = with_field_state(ProbeWidget::default()).mount(props("required"));
    let _ = field.render();
    let _ = field.render();
    assert_eq!(field.renders.get(), 2);
    assert_eq!(field.widget().renders.get(), 2);
    let widget = field.unmount();
    assert_eq!(widget.renders.get(), 2);
}

#[test]
fn unmount_runs_no_handlers_or_validation() {
    let log = CallLog::default();
    let (blur_log, change_log) = (log.clone(), log.clone());
    let mut field = with_field_state(ProbeWidget::default()).mount(
        props(logging_policy(&log))
            .validate_on_blur(true)
            .on_blur(move |_| blur_log.push("blur"))
            .on_change_text(move |_| change_log.push("change")),
    );
    field.on_focus(&1);
    let _ = field.unmount();
    assert!(log.entries().is_empty());
}

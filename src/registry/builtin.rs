use std::sync::LazyLock;

use regex::Regex;

use crate::domain::FieldValue;

use super::ValidatorRegistry;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}(?::\d{1,5})?(?:[/?#]\S*)?$")
        .expect("url pattern compiles")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("number pattern compiles"));

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,?\d{3})*(?:\.\d{1,2})?$").expect("price pattern compiles"));

pub(super) fn install(registry: &mut ValidatorRegistry) {
    registry.register("required", required);
    registry.register("email", |value| matches_text(&EMAIL, value));
    registry.register("url", |value| matches_text(&URL, value));
    registry.register("number", |value| matches_text(&NUMBER, value));
    registry.register("price", |value| matches_text(&PRICE, value));
}

fn required(value: &FieldValue) -> bool {
    !value.is_empty()
}

fn matches_text(pattern: &Regex, value: &FieldValue) -> bool {
    if value.is_empty() {
        return false;
    }
    pattern.is_match(&value.display_text())
}

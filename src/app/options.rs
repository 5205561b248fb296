use std::time::Duration;

use crate::field::ControllerOptions;

#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub tick_rate: Duration,
    pub allow_invalid: bool,
    pub show_help: bool,
    pub(crate) controller: ControllerOptions,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            allow_invalid: false,
            show_help: true,
            controller: ControllerOptions::default(),
        }
    }
}

impl PromptOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Let Enter submit a value that failed validation.
    pub fn with_allow_invalid(mut self, allow: bool) -> Self {
        self.allow_invalid = allow;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_controller_options(mut self, controller: ControllerOptions) -> Self {
        self.controller = controller;
        self
    }

    pub fn controller_options(&self) -> &ControllerOptions {
        &self.controller
    }
}

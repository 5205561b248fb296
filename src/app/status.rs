#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Enter submit • Tab toggle focus • Esc cancel";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn blurred(&mut self) {
        self.message = "Press Tab to edit again".to_string();
    }

    pub fn rejected(&mut self) {
        self.message = "Value is invalid. Fix it or press Esc to cancel.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

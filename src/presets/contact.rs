use crate::foundation::error::{FolioError, FolioResult};
use crate::presets::terminal::{TerminalConfig, TerminalScript};

/// Contact form fields as submitted. Nothing is sent anywhere; the response is simulated.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::validation("contact name is required"));
        }
        if self.message.trim().is_empty() {
            return Err(FolioError::validation("contact message is required"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FolioError::validation(format!(
                "contact email '{}' is not a valid address",
                self.email.trim()
            )));
        }
        Ok(())
    }

    /// The lines the simulated terminal prints back.
    pub fn response_lines(&self) -> Vec<String> {
        let name = self.name.trim();
        let email = self.email.trim();
        vec![
            "$ ./send_message.sh".to_string(),
            format!("> Connecting as {name} <{email}>..."),
            format!("> Payload: {} characters", self.message.trim().chars().count()),
            "> Message delivered successfully.".to_string(),
            format!("> Thanks, {name}! I'll get back to you soon."),
        ]
    }

    /// Validate and build the terminal script for the response.
    pub fn into_script(self, config: TerminalConfig) -> FolioResult<TerminalScript> {
        self.validate()?;
        TerminalScript::new(self.response_lines(), config)
    }
}

/// `local@domain.tld` with no whitespace; deliberately loose.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/presets/contact.rs"]
mod tests;

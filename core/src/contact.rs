use std::fmt;

pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const SENT_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        match self.missing().first() {
            Some(field) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Lifecycle of the stubbed contact submission. Nothing leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl SubmitPhase {
    /// Starts a submission. Returns the delay before `finish` should run.
    pub fn begin(&mut self, draft: &ContactDraft) -> Result<u32, ContactError> {
        if *self == SubmitPhase::Submitting {
            return Err(ContactError::Busy);
        }
        draft.validate()?;
        *self = SubmitPhase::Submitting;
        Ok(SUBMIT_DELAY_MS)
    }

    /// Completes the stub submission, clearing the draft. Returns how long the
    /// confirmation stays visible.
    pub fn finish(&mut self, draft: &mut ContactDraft) -> Option<u32> {
        if *self != SubmitPhase::Submitting {
            return None;
        }
        *draft = ContactDraft::default();
        *self = SubmitPhase::Sent;
        Some(SENT_NOTICE_MS)
    }

    pub fn dismiss(&mut self) {
        if *self == SubmitPhase::Sent {
            *self = SubmitPhase::Idle;
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Submitting => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
        }
    }
}

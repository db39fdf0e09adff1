use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_NAME: usize = 100;
const MIN_MESSAGE: usize = 10;
const MAX_MESSAGE: usize = 5000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please choose a subject")]
    UnknownSubject,
    #[error("Message should be at least 10 characters")]
    MessageTooShort,
    #[error("Message should be at most 5000 characters")]
    MessageTooLong,
}

/// Where a contact form submission stands. `Sent` and `Failed` are shown to
/// the visitor until they expire back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// The state a new submission moves to, or `None` while one is in flight.
    pub fn begin(self) -> Option<Self> {
        match self {
            SubmitStatus::Sending => None,
            _ => Some(SubmitStatus::Sending),
        }
    }

    pub fn finish(self, delivered: bool) -> Self {
        match (self, delivered) {
            (SubmitStatus::Sending, true) => SubmitStatus::Sent,
            (SubmitStatus::Sending, false) => SubmitStatus::Failed,
            (other, _) => other,
        }
    }

    /// Clears an outcome message. An in-flight submission is left alone.
    pub fn expire(self) -> Self {
        match self {
            SubmitStatus::Sending => SubmitStatus::Sending,
            _ => SubmitStatus::Idle,
        }
    }

    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some("Message sent successfully! I'll get back to you soon."),
            SubmitStatus::Failed => Some("Something went wrong. Please try again."),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    #[serde(rename = "_replyto")]
    reply_to: &'a str,
}

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// JSON body posted to the form relay. The relay answers to `_replyto`.
    pub fn relay_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&RelayPayload {
            name: self.name.trim(),
            email: self.email.trim(),
            subject: &self.subject,
            message: self.message.trim(),
            reply_to: self.email.trim(),
        })
    }

    /// Checks the fields before they are posted to the relay.
    pub fn validate(&self, subjects: &[String]) -> Result<(), ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > MAX_NAME {
            return Err(ContactError::NameTooLong);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if !subjects.iter().any(|s| s == &self.subject) {
            return Err(ContactError::UnknownSubject);
        }
        let message = self.message.trim().chars().count();
        if message < MIN_MESSAGE {
            return Err(ContactError::MessageTooShort);
        }
        if message > MAX_MESSAGE {
            return Err(ContactError::MessageTooLong);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<String> {
        vec!["General Inquiry".to_string(), "Other".to_string()]
    }

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Other".to_string(),
            message: "Would love to chat about a project.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(valid().validate(&subjects()), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let form = ContactSubmission {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(form.validate(&subjects()), Err(ContactError::MissingName));
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "a da@x.io", "a@b@c.io", "ada@.io"] {
            let form = ContactSubmission {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(
                form.validate(&subjects()),
                Err(ContactError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
        let form = ContactSubmission {
            email: "first.last+tag@mail.example.co".to_string(),
            ..valid()
        };
        assert_eq!(form.validate(&subjects()), Ok(()));
    }

    #[test]
    fn test_subject_must_be_offered() {
        let form = ContactSubmission {
            subject: String::new(),
            ..valid()
        };
        assert_eq!(form.validate(&subjects()), Err(ContactError::UnknownSubject));
    }

    #[test]
    fn test_message_length() {
        let short = ContactSubmission {
            message: "hi".to_string(),
            ..valid()
        };
        assert_eq!(short.validate(&subjects()), Err(ContactError::MessageTooShort));

        let long = ContactSubmission {
            message: "x".repeat(MAX_MESSAGE + 1),
            ..valid()
        };
        assert_eq!(long.validate(&subjects()), Err(ContactError::MessageTooLong));
        assert_eq!(
            ContactError::MessageTooShort.to_string(),
            "Message should be at least 10 characters"
        );
    }

    #[test]
    fn test_relay_body_carries_reply_to() {
        let form = ContactSubmission {
            email: " ada@example.com ".to_string(),
            ..valid()
        };
        let body: serde_json::Value = serde_json::from_str(&form.relay_body().unwrap()).unwrap();
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["_replyto"], "ada@example.com");
        assert_eq!(body["subject"], "Other");
        assert_eq!(body["message"], "Would love to chat about a project.");
    }

    #[test]
    fn test_submit_status_flow() {
        let sending = SubmitStatus::Idle.begin().unwrap();
        assert!(sending.is_sending());
        assert_eq!(sending.begin(), None);
        assert_eq!(sending.message(), None);

        let sent = sending.finish(true);
        assert_eq!(sent, SubmitStatus::Sent);
        assert!(sent.message().unwrap().starts_with("Message sent"));
        assert_eq!(sent.expire(), SubmitStatus::Idle);

        let failed = sending.finish(false);
        assert_eq!(failed, SubmitStatus::Failed);
        assert_eq!(failed.message(), Some("Something went wrong. Please try again."));
        assert_eq!(failed.begin(), Some(SubmitStatus::Sending));
    }

    #[test]
    fn test_status_expiry_spares_a_new_submission() {
        // the reset timer from an earlier outcome fires after a resubmit
        let resent = SubmitStatus::Failed.begin().unwrap();
        assert_eq!(resent.expire(), SubmitStatus::Sending);
        assert_eq!(SubmitStatus::Idle.finish(true), SubmitStatus::Idle);
    }
}

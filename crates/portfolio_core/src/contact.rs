//! Contact form state: field values, submission phase and inline error.

pub type SubmissionId = u64;

/// Inline message shown when a submission fails.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "There was a problem sending your message. Please try again.";

/// Options offered by the subject select.
pub const SUBJECT_CHOICES: [&str; 5] = [
    "Job Opportunity",
    "Project Inquiry",
    "Collaboration",
    "General Question",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields that are still empty, in form order.
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    #[default]
    Idle,
    Submitting {
        submission_id: SubmissionId,
    },
    Submitted,
}

/// Result of a submission attempt as reported back to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    phase: ContactPhase,
    error: Option<String>,
    missing: Vec<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fields flagged by the last rejected submit attempt.
    pub fn missing(&self) -> &[ContactField] {
        &self.missing
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        match self.phase {
            ContactPhase::Submitting { submission_id } => Some(submission_id),
            ContactPhase::Idle | ContactPhase::Submitted => None,
        }
    }

    /// Returns false when the form is not accepting edits.
    pub(crate) fn edit(&mut self, field: ContactField, value: String) -> bool {
        if self.phase != ContactPhase::Idle {
            return false;
        }
        self.fields.set(field, value);
        self.missing.retain(|missing| *missing != field);
        true
    }

    /// Starts a submission and returns the payload to send, if allowed.
    pub(crate) fn begin_submit(&mut self, submission_id: SubmissionId) -> Option<ContactFields> {
        if self.phase != ContactPhase::Idle {
            return None;
        }
        let missing = self.fields.missing();
        if !missing.is_empty() {
            self.missing = missing;
            return None;
        }
        self.missing.clear();
        self.error = None;
        self.phase = ContactPhase::Submitting { submission_id };
        Some(self.fields.clone())
    }

    /// Applies a submission result; stale ids are ignored.
    pub(crate) fn resolve(&mut self, submission_id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        if self.in_flight() != Some(submission_id) {
            return false;
        }
        match outcome {
            SubmissionOutcome::Delivered => {
                self.phase = ContactPhase::Submitted;
                self.fields = ContactFields::default();
            }
            SubmissionOutcome::Failed { .. } => {
                self.phase = ContactPhase::Idle;
                self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub(crate) fn send_another(&mut self) -> bool {
        if self.phase != ContactPhase::Submitted {
            return false;
        }
        *self = Self::default();
        true
    }
}

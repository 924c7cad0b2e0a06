use crate::{ContactFields, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitContact {
        submission_id: SubmissionId,
        fields: ContactFields,
    },
    CancelSubmission {
        submission_id: SubmissionId,
    },
}

use std::io;
use std::time::Duration;

use portfolio_core::{ContactFields, Effect, Msg, SubmissionOutcome};
use portfolio_engine::{ContactMessage, EngineEvent, EngineHandle, SubmitSettings};
use site_logging::{site_info, CONTACT_TARGET};

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &SubmitSettings) -> io::Result<Self> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitContact {
                    submission_id,
                    fields,
                } => {
                    site_info!(
                        target: CONTACT_TARGET,
                        "SubmitContact submission_id={} subject={:?} message_len={}",
                        submission_id,
                        fields.subject,
                        fields.message.len()
                    );
                    self.engine.submit(submission_id, to_message(fields));
                }
                Effect::CancelSubmission { submission_id } => {
                    self.engine.cancel(submission_id);
                }
            }
        }
    }

    /// Messages for every engine event that is already available.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn to_message(fields: ContactFields) -> ContactMessage {
    ContactMessage {
        name: fields.name,
        email: fields.email,
        subject: fields.subject,
        message: fields.message,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted {
            submission_id,
            result,
        } => Msg::ContactSubmitResolved {
            submission_id,
            outcome: match result {
                Ok(_) => SubmissionOutcome::Delivered,
                Err(kind) => SubmissionOutcome::Failed {
                    reason: kind.to_string(),
                },
            },
        },
    }
}

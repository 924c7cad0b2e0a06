use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use site_logging::{site_info, site_warn, CONTACT_TARGET};
use tokio_util::sync::CancellationToken;

use crate::submit::{build_submitter, SubmitSettings, Submitter};
use crate::{ContactMessage, EngineEvent, SubmissionId};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        message: ContactMessage,
    },
    Cancel {
        submission_id: SubmissionId,
    },
}

type InFlight = Arc<Mutex<HashMap<SubmissionId, CancellationToken>>>;

/// Runs submissions on a background tokio runtime and reports completions.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &SubmitSettings) -> io::Result<Self> {
        Self::with_submitter(build_submitter(settings))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

        thread::Builder::new()
            .name("portfolio-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    handle_command(&runtime, &submitter, &in_flight, &event_tx, command);
                }
                // Sender dropped: cancel whatever is still running before the runtime goes.
                if let Ok(tokens) = in_flight.lock() {
                    tokens.values().for_each(CancellationToken::cancel);
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, message: ContactMessage) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            message,
        });
    }

    pub fn cancel(&self, submission_id: SubmissionId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { submission_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    submitter: &Arc<dyn Submitter>,
    in_flight: &InFlight,
    event_tx: &mpsc::Sender<EngineEvent>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            message,
        } => {
            let token = CancellationToken::new();
            if let Ok(mut tokens) = in_flight.lock() {
                tokens.insert(submission_id, token.clone());
            }
            site_info!(target: CONTACT_TARGET, "submission {} started", submission_id);

            let submitter = Arc::clone(submitter);
            let in_flight = Arc::clone(in_flight);
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = submitter.submit(submission_id, &message, &token).await;
                if let Ok(mut tokens) = in_flight.lock() {
                    tokens.remove(&submission_id);
                }
                let result = match result {
                    Ok(receipt) => {
                        site_info!(
                            target: CONTACT_TARGET,
                            "submission {} delivered (status {:?})",
                            submission_id,
                            receipt.status
                        );
                        Ok(receipt)
                    }
                    Err(err) => {
                        site_warn!(
                            target: CONTACT_TARGET,
                            "submission {} failed: {}",
                            submission_id,
                            err
                        );
                        Err(err.kind)
                    }
                };
                let _ = event_tx.send(EngineEvent::SubmissionCompleted {
                    submission_id,
                    result,
                });
            });
        }
        EngineCommand::Cancel { submission_id } => {
            let token = in_flight
                .lock()
                .ok()
                .and_then(|mut tokens| tokens.remove(&submission_id));
            match token {
                Some(token) => {
                    site_info!(target: CONTACT_TARGET, "cancelling submission {}", submission_id);
                    token.cancel();
                }
                None => {
                    site_info!(
                        target: CONTACT_TARGET,
                        "cancel for submission {} ignored; not in flight",
                        submission_id
                    );
                }
            }
        }
    }
}

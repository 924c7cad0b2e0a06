use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use portfolio_core::{update, AppState, AppViewModel, Catalog, Msg};
use site_logging::site_trace;

use crate::effects::EffectRunner;

/// One visitor's session: page state plus the effect runner feeding it.
pub struct Session {
    state: AppState,
    effects: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    pub fn new(catalog: Catalog, effects: EffectRunner) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state: AppState::with_catalog(catalog),
            effects,
            msg_tx,
            msg_rx,
        }
    }

    /// Background tick that drives the typed-headline animation.
    pub fn spawn_ticker(&self, interval: Duration) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            while msg_tx.send(Msg::Tick).is_ok() {
                thread::sleep(interval);
            }
        });
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies one message; returns a fresh view when the page changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        if !matches!(msg, Msg::Tick) {
            site_trace!("dispatch {:?}", msg);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        was_dirty.then(|| self.state.view())
    }

    /// Handles queued ticks and engine results without blocking.
    pub fn process_pending(&mut self) -> Option<AppViewModel> {
        let mut inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        inbox.extend(self.effects.drain());
        let mut latest = None;
        for msg in inbox {
            if let Some(view) = self.dispatch(msg) {
                latest = Some(view);
            }
        }
        latest
    }

    /// Blocks until the in-flight submission resolves or `timeout` passes.
    ///
    /// Returns false on timeout.
    pub fn wait_for_submission(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.contact().in_flight().is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if let Some(msg) = self.effects.wait(remaining) {
                self.dispatch(msg);
            }
        }
        true
    }
}

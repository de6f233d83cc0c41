//! Editing session: owns the model and performs the side effects that
//! update functions request.
//!
//! Slow work (file and dictionary I/O) runs on worker threads; results come
//! back as messages over an mpsc channel and are applied one at a time, so
//! the model is only ever touched from the session's thread.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::case::Dictionary;
use crate::commands::Cmd;
use crate::messages::{AppMsg, InputMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

use super::clipboard::Clipboard;

/// Upper bound on how long `wait_idle` blocks for a single job
const JOB_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Session {
    model: AppModel,
    clipboard: Box<dyn Clipboard>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Messages queued on the channel that have not been applied yet
    pending: usize,
    /// Content handed to the host by saves of internal documents
    published: Vec<String>,
}

impl Session {
    pub fn new(model: AppModel, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            clipboard,
            msg_tx,
            msg_rx,
            pending: 0,
            published: Vec::new(),
        }
    }

    /// Start loading the configured dictionary, if any
    pub fn load_configured_dictionary(&mut self) {
        if let Some(path) = self.model.config.dictionary_path.clone() {
            self.dispatch(Msg::App(AppMsg::LoadDictionary(path)));
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    pub fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    /// Content published by saves of internal documents, oldest first
    pub fn published(&self) -> &[String] {
        &self.published
    }

    /// Number of results still outstanding
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Apply a message and perform the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Apply every result that has already arrived, without blocking.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Block until every outstanding job has reported back
    pub fn wait_idle(&mut self) {
        while self.pending > 0 {
            match self.msg_rx.recv_timeout(JOB_TIMEOUT) {
                Ok(msg) => {
                    self.pending -= 1;
                    self.dispatch(msg);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("Gave up waiting for {} background job(s)", self.pending);
                    self.pending = 0;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.pending = 0;
                }
            }
        }
    }

    /// Dispatch messages one by one, letting each settle before the next
    pub fn run<I>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = Msg>,
    {
        for msg in msgs {
            self.dispatch(msg);
            self.wait_idle();
        }
    }

    fn send(&mut self, msg: Msg) {
        self.pending += 1;
        if self.msg_tx.send(msg).is_err() {
            self.pending -= 1;
        }
    }

    fn spawn_job<F>(&mut self, job: F)
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        self.pending += 1;
        let tx = self.msg_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(job());
        });
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::WriteClipboard(text) => {
                if let Err(e) = self.clipboard.write_text(&text) {
                    tracing::warn!("Clipboard write failed: {}", e);
                }
            }
            Cmd::ReadClipboard => match self.clipboard.read_text() {
                Ok(text) if !text.is_empty() => self.send(Msg::Input(InputMsg::Paste(text))),
                Ok(_) => tracing::debug!("Clipboard is empty, nothing to paste"),
                Err(e) => tracing::warn!("Clipboard read failed: {}", e),
            },
            Cmd::LoadDictionary { path } => {
                self.spawn_job(move || Msg::App(AppMsg::DictionaryLoaded(load_dictionary(&path))));
            }
            Cmd::LoadFile { path } => {
                self.spawn_job(move || {
                    let result = std::fs::read_to_string(&path).map_err(|e| e.to_string());
                    Msg::App(AppMsg::FileLoaded { path, result })
                });
            }
            Cmd::SaveFile { path, content } => {
                self.spawn_job(move || {
                    let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                    Msg::App(AppMsg::SaveCompleted { path, result })
                });
            }
            Cmd::PublishContent(text) => {
                tracing::info!("Published {} chars to host", text.chars().count());
                self.published.push(text);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

fn load_dictionary(path: &Path) -> Result<Arc<Dictionary>, String> {
    Dictionary::load(path)
        .map(Arc::new)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

//! Scripted host for workbench tests

use std::collections::VecDeque;
use std::sync::Mutex;

use propdesk_core::prelude::*;
use propdesk_core::AccessMode;
use propdesk_fs::MemoryDirectory;

use crate::host::Host;

/// Host answering from a script and recording everything it was asked
#[derive(Debug, Default)]
pub struct ScriptedHost {
    directories: Mutex<VecDeque<Option<MemoryDirectory>>>,
    answers: Mutex<VecDeque<bool>>,
    default_answer: Mutex<bool>,
    confirms: Mutex<Vec<String>>,
    notifications: Mutex<Vec<(String, String)>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next directory prompt grants `dir`
    pub fn grant(self, dir: MemoryDirectory) -> Self {
        self.directories.lock().unwrap().push_back(Some(dir));
        self
    }

    /// Next directory prompt is cancelled
    pub fn cancel_prompt(self) -> Self {
        self.directories.lock().unwrap().push_back(None);
        self
    }

    /// Queue the answer to the next confirmation
    pub fn answer(&self, yes: bool) {
        self.answers.lock().unwrap().push_back(yes);
    }

    /// Answer for confirmations with nothing queued
    pub fn always(&self, yes: bool) {
        *self.default_answer.lock().unwrap() = yes;
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    /// `(title, message)` pairs in order
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn take_notifications(&self) -> Vec<(String, String)> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }
}

impl Host for ScriptedHost {
    type Directory = MemoryDirectory;

    async fn prompt_directory(
        &self,
        _mode: AccessMode,
        _start_hint: &str,
    ) -> Result<MemoryDirectory> {
        let next = self.directories.lock().unwrap().pop_front();
        next.flatten().ok_or(Error::UserCancelled)
    }

    async fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        let queued = self.answers.lock().unwrap().pop_front();
        queued.unwrap_or(*self.default_answer.lock().unwrap())
    }

    fn notify(&self, message: &str, title: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

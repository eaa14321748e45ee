//! # Collaborators
//!
//! The editor talks to the page around it through two small traits, and to the
//! remote services through the traits in [`crate::store`]. All of them are
//! bundled into an [`EditorContext`] that is handed to the session when it
//! starts running, not when it is constructed, the same late binding the
//! sequencers use (`run(&ctx, ..)`).
//!
//! The recording implementations at the bottom are used by the tests and by
//! anything that needs to drive the editor headless.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::editor::PreviewRegistry;
use crate::lifecycle::EditorConfig;
use crate::store::{DataStore, ObjectStore};

/// Blocking dialogs shown to the user.
pub trait Prompt: Send + Sync {
    /// Asks a yes/no question. `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user has to dismiss.
    fn alert(&self, message: &str);
}

/// Client-side routing.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Dependencies injected into the session and its sequencers.
#[derive(Clone)]
pub struct EditorContext {
    pub data: Arc<dyn DataStore>,
    pub objects: Arc<dyn ObjectStore>,
    pub prompt: Arc<dyn Prompt>,
    pub navigator: Arc<dyn Navigator>,
    /// Owner of the `blob:` previews shown for pending images.
    pub previews: PreviewRegistry,
    pub config: EditorConfig,
}

impl EditorContext {
    pub fn new(
        data: Arc<dyn DataStore>,
        objects: Arc<dyn ObjectStore>,
        prompt: Arc<dyn Prompt>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            data,
            objects,
            prompt,
            navigator,
            previews: PreviewRegistry::new(),
            config: EditorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_previews(mut self, previews: PreviewRegistry) -> Self {
        self.previews = previews;
        self
    }
}

// =============================================================================
// HEADLESS IMPLEMENTATIONS
// =============================================================================

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Prompt with scripted answers that records every dialog it was shown.
///
/// Answers are consumed in order; once the script runs out, `default_answer`
/// is used.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<bool>>>,
    default_answer: bool,
    confirms: Arc<Mutex<Vec<String>>>,
    alerts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    /// Confirms every question.
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// Declines every question.
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(default_answer: bool) -> Self {
        Self {
            answers: Arc::default(),
            default_answer,
            confirms: Arc::default(),
            alerts: Arc::default(),
        }
    }

    pub fn then_answer(self, answer: bool) -> Self {
        lock(&self.answers).push_back(answer);
        self
    }

    pub fn confirms(&self) -> Vec<String> {
        lock(&self.confirms).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        lock(&self.confirms).push(message.to_string());
        let answer = lock(&self.answers).pop_front().unwrap_or(self.default_answer);
        info!(message, answer, "Confirm");
        answer
    }

    fn alert(&self, message: &str) {
        info!(message, "Alert");
        lock(&self.alerts).push(message.to_string());
    }
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        lock(&self.routes).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "Navigate");
        lock(&self.routes).push(route.to_string());
    }
}

use std::sync::Mutex;

use tracing::Level;

use crate::users::repo_types::User;

/// Structured-event collaborator, injected into the service at construction
/// so tests can substitute it. Emission is fire-and-forget: nothing here may
/// affect an operation's outcome.
pub trait EventLogger: Send + Sync {
    /// Success-path event; `record` carries the affected user when one exists
    /// (delete emits a message only).
    fn info(&self, message: &str, record: Option<&User>);

    /// Failure-path event, one per failed operation.
    fn error(&self, message: &str);
}

/// Production logger forwarding to the `tracing` subscriber.
pub struct TracingLogger;

impl EventLogger for TracingLogger {
    fn info(&self, message: &str, record: Option<&User>) {
        match record {
            Some(user) => tracing::info!(user = ?user, "{message}"),
            None => tracing::info!("{message}"),
        }
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub level: Level,
    pub message: String,
    pub record: Option<User>,
}

/// Logger that records events for later assertion.
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LoggedEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .count()
    }
}

impl EventLogger for MemoryLogger {
    fn info(&self, message: &str, record: Option<&User>) {
        self.events.lock().unwrap().push(LoggedEvent {
            level: Level::INFO,
            message: message.to_string(),
            record: record.cloned(),
        });
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push(LoggedEvent {
            level: Level::ERROR,
            message: message.to_string(),
            record: None,
        });
    }
}

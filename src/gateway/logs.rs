use crate::gateway::events::Notifier;

// LogNotifier forwards messages to the tracing subscriber
#[derive(Debug, Default)]
pub struct LogNotifier {}

impl LogNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "catalog::notification", "{}", message);
    }
}

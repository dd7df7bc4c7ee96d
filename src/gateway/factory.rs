use std::sync::Arc;
use crate::gateway::console::ConsoleNotifier;
use crate::gateway::events::Notifier;
use crate::gateway::GatewayNotifierVia;
use crate::gateway::logs::LogNotifier;

pub fn create_notifier(via: GatewayNotifierVia) -> Arc<dyn Notifier> {
    match via {
        GatewayNotifierVia::Console => {
            Arc::new(ConsoleNotifier::new())
        }
        GatewayNotifierVia::Log => {
            Arc::new(LogNotifier::new())
        }
    }
}

use serde::{Deserialize, Serialize};

pub mod console;
pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayNotifierVia {
    Console,
    Log,
}

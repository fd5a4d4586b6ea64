//! Build-time defaults and the few runtime knobs the tool exposes.

use crate::dispatch::DispatchConfig;
use crate::generator::IdMode;

/// Where orders go unless an endpoint is passed on the command line.
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:7121/wss/orders";

/// Everything the runtime needs to wire the system together.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub id_mode: IdMode,
    /// `None` draws a fresh user id per order.
    pub user_id: Option<u32>,
    pub dispatch: DispatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            id_mode: IdMode::Counter,
            user_id: None,
            dispatch: DispatchConfig::default(),
        }
    }
}

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::generator::OrderGenerator;
use crate::input;
use crate::transport::{TransportError, WsSink};

/// Capacity of the operator command channel. Commands are tiny and the
/// dispatcher drains them every iteration, so a small buffer suffices.
const COMMAND_BUFFER: usize = 8;

/// The assembled load generator: one live connection, one dispatch
/// loop, one input listener.
///
/// # Lifecycle
///
/// [`LoadSystem::connect`] establishes the connection and spawns the
/// input listener; [`LoadSystem::run`] drives the dispatch loop to
/// completion, closes the socket, and stops the listener.
pub struct LoadSystem {
    dispatcher: Dispatcher<WsSink>,
    input_handle: JoinHandle<()>,
}

impl LoadSystem {
    /// Connects to the endpoint and wires the tasks together.
    ///
    /// A connect failure is fatal: no retry, no backoff, the error goes
    /// straight back to `main`.
    pub async fn connect(config: Config) -> Result<Self, TransportError> {
        let sink = WsSink::connect(&config.endpoint).await?;

        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let input_handle = input::spawn(commands);

        let generator = OrderGenerator::new(config.id_mode, config.user_id);
        let dispatcher = Dispatcher::new(sink, generator, receiver, config.dispatch);

        Ok(Self {
            dispatcher,
            input_handle,
        })
    }

    /// Runs until the operator quits (or stdin closes), then tears the
    /// system down.
    pub async fn run(self) {
        let mut sink = self.dispatcher.run().await;
        sink.close().await;

        // The listener may still be parked on a blocked stdin read; it
        // cannot be joined cooperatively.
        self.input_handle.abort();
        let _ = self.input_handle.await;

        info!("shutdown complete");
    }
}

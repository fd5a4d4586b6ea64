//! Error types for the transport layer.

use thiserror::Error;

/// Errors raised while establishing the connection or sending an order.
///
/// Connect failures abort startup; send and serialize failures are
/// reported to the dispatch loop and recovered there.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The initial WebSocket handshake failed.
    #[error("connect to {url} failed: {source}")]
    Connect {
        url: String,
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// Sending a frame over the established connection failed.
    #[error("websocket send failed: {0}")]
    Send(#[from] tokio_tungstenite::tungstenite::Error),

    /// The order could not be serialized to JSON.
    #[error("order serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

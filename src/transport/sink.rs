use async_trait::async_trait;
use futures_util::SinkExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};

use crate::model::Order;
use crate::transport::TransportError;

/// Destination for generated orders.
///
/// The dispatch loop is the only caller, so every frame goes out through
/// a single writer.
#[async_trait]
pub trait OrderSink: Send {
    /// Serializes the order and transmits it as one text frame.
    async fn send(&mut self, order: &Order) -> Result<(), TransportError>;
}

/// The live WebSocket connection to the order-consuming service.
pub struct WsSink {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsSink {
    /// Establishes the connection. Failure here is fatal for startup;
    /// there is no retry.
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        let (stream, _) = connect_async(url)
            .await
            .map_err(|source| TransportError::Connect {
                url: url.to_string(),
                source,
            })?;
        info!(%url, "connected to order endpoint");
        Ok(Self { stream })
    }

    /// Sends a close frame and shuts the connection down.
    pub async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            warn!(error = %e, "websocket close failed");
        }
    }
}

#[async_trait]
impl OrderSink for WsSink {
    async fn send(&mut self, order: &Order) -> Result<(), TransportError> {
        let payload = serde_json::to_string(order)?;
        self.stream.send(Message::Text(payload)).await?;
        info!(order_id = %order.id, timestamp = %order.timestamp, "sent order");
        Ok(())
    }
}

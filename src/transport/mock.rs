//! Test double for the transport layer.
//!
//! [`RecordingSink`] captures every order the dispatch loop tries to
//! send, so loop behavior can be asserted without a live server. It can
//! also be switched into a failing mode to exercise the non-fatal
//! per-send error path.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_tungstenite::tungstenite;

use crate::model::Order;
use crate::transport::{OrderSink, TransportError};

/// An [`OrderSink`] that records sends instead of transmitting them.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<Order>>>,
    fail_sends: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent `send` fails as if the connection had closed.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: true,
        }
    }

    /// Shared handle to the captured orders; clones see live updates.
    pub fn captured(&self) -> Arc<Mutex<Vec<Order>>> {
        self.sent.clone()
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<Order> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderSink for RecordingSink {
    async fn send(&mut self, order: &Order) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError::Send(tungstenite::Error::ConnectionClosed));
        }
        self.sent.lock().unwrap().push(order.clone());
        Ok(())
    }
}

//! The dispatch loop: the single writer behind the connection.
//!
//! Every send, whether an auto tick or an operator-triggered one-off,
//! happens on this task. The input listener only ever talks to it
//! through the control channel, so no two writers can race on the
//! socket.

use std::time::Duration;

use rand::{thread_rng, Rng};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::dispatch::{Command, State};
use crate::generator::OrderGenerator;
use crate::transport::OrderSink;

/// Timing knobs for the loop. Tests shrink these to run instantly.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Inclusive bounds, in milliseconds, of the randomized delay
    /// between auto-mode sends.
    pub auto_delay_ms: (u64, u64),
    /// How long the loop sleeps between control-channel polls while
    /// waiting for input.
    pub idle_poll: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            auto_delay_ms: (3_000, 8_000),
            idle_poll: Duration::from_millis(500),
        }
    }
}

/// Runs the send loop against a sink until told to quit.
pub struct Dispatcher<S: OrderSink> {
    state: State,
    commands: mpsc::Receiver<Command>,
    sink: S,
    generator: OrderGenerator,
    config: DispatchConfig,
}

impl<S: OrderSink> Dispatcher<S> {
    pub fn new(
        sink: S,
        generator: OrderGenerator,
        commands: mpsc::Receiver<Command>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            state: State::WaitingForInput,
            commands,
            sink,
            generator,
            config,
        }
    }

    /// Runs until the state machine reaches `Exiting`, then returns the
    /// sink so the caller can close the connection.
    ///
    /// Commands are drained without blocking once per iteration; an
    /// in-flight delay is never interrupted early. A closed control
    /// channel (input listener gone) counts as a quit.
    pub async fn run(mut self) -> S {
        info!("dispatch loop started");
        loop {
            self.drain_commands().await;

            match self.state {
                State::Exiting => {
                    info!("dispatch loop exiting");
                    break;
                }
                State::AutoSending => {
                    self.send_order().await;
                    let delay_ms = {
                        let mut rng = thread_rng();
                        rng.gen_range(self.config.auto_delay_ms.0..=self.config.auto_delay_ms.1)
                    };
                    debug!(delay_ms, "auto tick complete");
                    sleep(Duration::from_millis(delay_ms)).await;
                }
                State::WaitingForInput => {
                    sleep(self.config.idle_poll).await;
                }
            }
        }
        self.sink
    }

    async fn drain_commands(&mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(Command::SendOne) => self.send_order().await,
                Ok(command) => {
                    let next = self.state.apply(command);
                    if next != self.state {
                        info!(from = ?self.state, to = ?next, "mode changed");
                    }
                    self.state = next;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("control channel closed, shutting down");
                    self.state = State::Exiting;
                    break;
                }
            }
        }
    }

    /// One generate+transmit. Send failures are logged and swallowed;
    /// the loop keeps running.
    async fn send_order(&mut self) {
        let order = self.generator.generate();
        if let Err(e) = self.sink.send(&order).await {
            warn!(order_id = %order.id, error = %e, "send failed, continuing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::IdMode;
    use crate::transport::mock::RecordingSink;
    use tokio::time::timeout;

    fn fast_config() -> DispatchConfig {
        DispatchConfig {
            auto_delay_ms: (1, 2),
            idle_poll: Duration::from_millis(1),
        }
    }

    fn dispatcher(
        sink: RecordingSink,
        buffer: usize,
    ) -> (Dispatcher<RecordingSink>, mpsc::Sender<Command>) {
        let (tx, rx) = mpsc::channel(buffer);
        let generator = OrderGenerator::new(IdMode::Counter, Some(1));
        (Dispatcher::new(sink, generator, rx, fast_config()), tx)
    }

    #[tokio::test]
    async fn send_one_emits_exactly_one_order_and_quit_stops_the_loop() {
        let sink = RecordingSink::new();
        let (dispatcher, tx) = dispatcher(sink, 8);

        tx.send(Command::SendOne).await.unwrap();
        tx.send(Command::Quit).await.unwrap();

        let sink = timeout(Duration::from_secs(1), dispatcher.run())
            .await
            .expect("loop should exit after quit");
        assert_eq!(sink.sent().len(), 1);
    }

    #[tokio::test]
    async fn auto_mode_keeps_sending_until_quit() {
        let sink = RecordingSink::new();
        let captured = sink.captured();
        let (dispatcher, tx) = dispatcher(sink, 8);

        tx.send(Command::ToggleAuto).await.unwrap();
        let handle = tokio::spawn(dispatcher.run());

        // Give a few 1-2ms ticks time to fire.
        sleep(Duration::from_millis(50)).await;
        assert!(!captured.lock().unwrap().is_empty());
        tx.send(Command::Quit).await.unwrap();

        let sink = timeout(Duration::from_secs(1), handle)
            .await
            .expect("loop should exit after quit")
            .unwrap();
        assert!(!sink.sent().is_empty());

        // Counter ids stay distinct and timestamps never go backwards.
        let sent = sink.sent();
        for pair in sent.windows(2) {
            assert_ne!(pair[0].id, pair[1].id);
            assert!(pair[1].timestamp >= pair[0].timestamp);
        }
    }

    #[tokio::test]
    async fn closed_control_channel_stops_the_loop() {
        let sink = RecordingSink::new();
        let (dispatcher, tx) = dispatcher(sink, 8);
        drop(tx);

        let sink = timeout(Duration::from_secs(1), dispatcher.run())
            .await
            .expect("loop should exit when the channel closes");
        assert!(sink.sent().is_empty());
    }

    #[tokio::test]
    async fn send_failure_is_not_fatal() {
        let sink = RecordingSink::failing();
        let (dispatcher, tx) = dispatcher(sink, 8);

        tx.send(Command::SendOne).await.unwrap();
        tx.send(Command::SendOne).await.unwrap();
        tx.send(Command::Quit).await.unwrap();

        // Both failed sends are swallowed and the loop still exits.
        let sink = timeout(Duration::from_secs(1), dispatcher.run())
            .await
            .expect("loop should survive failed sends");
        assert!(sink.sent().is_empty());
    }
}

//! Operator commands and the dispatch state machine.

/// A discrete operator command, produced by the input listener and
/// consumed by the dispatch loop over the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate and transmit one order immediately.
    SendOne,
    /// Toggle auto-generation on or off.
    ToggleAuto,
    /// Stop the dispatch loop and terminate.
    Quit,
}

/// Dispatch loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Idle; polls the control channel and sleeps briefly.
    WaitingForInput,
    /// Sends an order on every tick, with a randomized inter-send delay.
    AutoSending,
    /// Terminal; the loop exits.
    Exiting,
}

impl State {
    /// Pure transition function.
    ///
    /// `SendOne` never changes state (the send itself happens in the
    /// loop); `ToggleAuto` is a symmetric toggle; `Quit` is terminal
    /// from any state.
    pub fn apply(self, command: Command) -> State {
        match (self, command) {
            (State::Exiting, _) => State::Exiting,
            (_, Command::Quit) => State::Exiting,
            (State::WaitingForInput, Command::ToggleAuto) => State::AutoSending,
            (State::AutoSending, Command::ToggleAuto) => State::WaitingForInput,
            (state, Command::SendOne) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_idempotent() {
        let start = State::WaitingForInput;
        let once = start.apply(Command::ToggleAuto);
        assert_eq!(once, State::AutoSending);
        assert_eq!(once.apply(Command::ToggleAuto), start);
    }

    #[test]
    fn quit_from_auto_sending_goes_straight_to_exiting() {
        assert_eq!(State::AutoSending.apply(Command::Quit), State::Exiting);
    }

    #[test]
    fn send_one_never_changes_state() {
        assert_eq!(
            State::WaitingForInput.apply(Command::SendOne),
            State::WaitingForInput
        );
        assert_eq!(State::AutoSending.apply(Command::SendOne), State::AutoSending);
    }

    #[test]
    fn exiting_is_terminal() {
        assert_eq!(State::Exiting.apply(Command::ToggleAuto), State::Exiting);
        assert_eq!(State::Exiting.apply(Command::SendOne), State::Exiting);
    }
}

//! Button events delivered to the engine

/// Debounced button press from the front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Begin a cycle (idle only)
    Start,
    /// Abort to idle from any phase
    Stop,
    /// Next program (idle only)
    Up,
    /// Previous program (idle only)
    Down,
}

impl ButtonEvent {
    /// All events, in the priority order the input layer reports them
    pub const ALL: [ButtonEvent; 4] = [
        ButtonEvent::Stop,
        ButtonEvent::Start,
        ButtonEvent::Up,
        ButtonEvent::Down,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reported_first() {
        assert_eq!(ButtonEvent::ALL[0], ButtonEvent::Stop);
        assert_eq!(
            ButtonEvent::ALL,
            [
                ButtonEvent::Stop,
                ButtonEvent::Start,
                ButtonEvent::Up,
                ButtonEvent::Down
            ]
        );
    }
}

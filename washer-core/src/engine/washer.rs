//! Washer state machine driver
//!
//! The engine is the single owner of [`EngineState`]. Every entry point
//! takes the current monotonic time in milliseconds; phase timing uses
//! wrapping subtraction so the counter may roll over.

use crate::config::EngineConfig;
use crate::state::{ButtonEvent, ErrorKind, Exit, Phase};
use crate::traits::{Actuators, MotorDirection, MotorDrive, ValveMix, WallClock, WasherDisplay};

use super::valve::select_mix;

/// Mutable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineState {
    /// Current phase
    pub phase: Phase,
    /// Selected program, changed only while idle
    pub program_index: u8,
    /// Timestamp of the current phase's entry (ms)
    pub phase_start_ms: u32,
    /// Direction used when the motor is next driven
    pub motor_direction: MotorDirection,
}

impl EngineState {
    /// Power-up state
    pub fn new(now_ms: u32) -> Self {
        Self {
            phase: Phase::Idle,
            program_index: 0,
            phase_start_ms: now_ms,
            motor_direction: MotorDirection::Forward,
        }
    }
}

/// The engine's side-effect targets
///
/// Collaborators are fire-and-forget: nothing they report flows back into
/// the engine.
pub struct Collaborators<A, D, C> {
    /// Valve and motor outputs
    pub actuators: A,
    /// Status display
    pub display: D,
    /// Time-of-day source for the readout
    pub clock: C,
}

impl<A, D, C> Collaborators<A, D, C> {
    /// Bundle the three collaborators
    pub fn new(actuators: A, display: D, clock: C) -> Self {
        Self {
            actuators,
            display,
            clock,
        }
    }
}

/// Washer control engine
pub struct WasherEngine<A, D, C> {
    config: EngineConfig,
    state: EngineState,
    io: Collaborators<A, D, C>,
}

impl<A, D, C> WasherEngine<A, D, C>
where
    A: Actuators,
    D: WasherDisplay,
    C: WallClock,
{
    /// Create an engine; call [`init`](Self::init) before use
    pub fn new(config: EngineConfig, io: Collaborators<A, D, C>) -> Self {
        Self {
            config,
            state: EngineState::new(0),
            io,
        }
    }

    /// Reset to idle, drive all outputs off and refresh the display
    pub fn init(&mut self, now_ms: u32) {
        self.state = EngineState::new(now_ms);
        self.io.actuators.all_off();
        self.io
            .display
            .show_phase(self.state.phase, self.state.program_index);
        self.refresh_time();
    }

    /// Advance the state machine by one control-loop iteration
    ///
    /// Returns the new phase if a transition happened.
    pub fn tick(&mut self, now_ms: u32, temp_x10: i16) -> Option<Phase> {
        let phase = self.state.phase;

        let next = match phase.exit() {
            Exit::Never => {
                if phase.is_safe_state() {
                    self.io.actuators.all_off();
                }
                None
            }
            Exit::AfterFillDwell => {
                if self.phase_elapsed_ms(now_ms) >= self.config.fill_dwell_ms {
                    self.io.actuators.set_valves(ValveMix::CLOSED);
                    phase.successor()
                } else {
                    self.io
                        .actuators
                        .set_valves(select_mix(temp_x10, &self.config));
                    None
                }
            }
            Exit::Immediate => phase.successor(),
        };

        let next = next?;
        self.enter(now_ms, next);
        self.refresh_time();
        Some(next)
    }

    /// Handle a debounced button press
    pub fn on_button(&mut self, now_ms: u32, event: ButtonEvent) {
        let phase = self.state.phase;

        match event {
            ButtonEvent::Stop => self.enter(now_ms, Phase::Idle),
            ButtonEvent::Start if phase == Phase::Idle => self.enter(now_ms, Phase::FillWater),
            ButtonEvent::Up | ButtonEvent::Down if phase.accepts_selection() => {
                let program = self.state.program_index;
                let selected = match event {
                    ButtonEvent::Up if program < self.config.max_program => Some(program + 1),
                    ButtonEvent::Down if program > 0 => Some(program - 1),
                    _ => None,
                };
                if let Some(selected) = selected {
                    self.state.program_index = selected;
                    self.io.display.show_selected_program(selected);
                }
            }
            _ => {}
        }

        self.refresh_time();
    }

    /// Force the error phase with every output off
    ///
    /// This is the fault entry for conditions the transition table cannot
    /// express, such as a phase code that fails to decode with
    /// [`Phase::try_from`]. Only `Stop` leaves the error phase. Repeated
    /// faults are ignored.
    pub fn signal_fault(&mut self, now_ms: u32, kind: ErrorKind) {
        if self.state.phase == Phase::Error {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("fault {} in {}", kind, self.state.phase);
        #[cfg(not(feature = "defmt"))]
        let _ = kind;

        self.enter(now_ms, Phase::Error);
        self.refresh_time();
    }

    /// Push the wall-clock time to the display
    pub fn refresh_time(&mut self) {
        let time = self.io.clock.now().format();
        self.io.display.show_time(&time);
    }

    /// Switch phase, run its entry action and show it
    fn enter(&mut self, now_ms: u32, next: Phase) {
        #[cfg(feature = "defmt")]
        defmt::debug!("phase {} -> {}", self.state.phase, next);

        self.state.phase = next;
        self.state.phase_start_ms = now_ms;

        match next {
            Phase::Idle | Phase::Error => self.io.actuators.all_off(),
            Phase::Spin => {
                self.state.motor_direction = MotorDirection::Forward;
                self.io
                    .actuators
                    .set_motor(MotorDrive::running(self.state.motor_direction));
            }
            Phase::FillWater | Phase::Wash | Phase::Rinse => {}
        }

        self.io.display.show_phase(next, self.state.program_index);
    }
}

impl<A, D, C> WasherEngine<A, D, C> {
    /// Current state snapshot
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Selected program
    pub fn program_index(&self) -> u8 {
        self.state.program_index
    }

    /// Time spent in the current phase
    pub fn phase_elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.state.phase_start_ms)
    }

    /// Borrow the collaborators
    pub fn collaborators(&self) -> &Collaborators<A, D, C> {
        &self.io
    }

    /// Mutably borrow the collaborators, e.g. to sync the clock
    pub fn collaborators_mut(&mut self) -> &mut Collaborators<A, D, C> {
        &mut self.io
    }
}

//! Relay bank output stage
//!
//! Drives the hot valve, cold valve and the two motor windings from four
//! GPIO outputs (directly or via relay/SSR/MOSFET). The pins can be
//! configured as active-high (default) or active-low.
//!
//! Motor changes are break-before-make: the winding being released is
//! switched off before the other one is switched on, so forward and
//! reverse are never energised together.

use embedded_hal::digital::OutputPin;
use washer_core::traits::{Actuators, MotorDrive, ValveMix};

/// The four output pins of the relay bank
pub struct RelayPins<P> {
    pub hot: P,
    pub cold: P,
    pub forward: P,
    pub reverse: P,
}

/// Relay bank actuators
pub struct RelayBank<P> {
    pins: RelayPins<P>,
    /// If false, output ON = pin LOW
    active_high: bool,
    valves: ValveMix,
    motor: MotorDrive,
}

impl<P: OutputPin> RelayBank<P> {
    /// Create a relay bank with every output released
    pub fn new(pins: RelayPins<P>, active_high: bool) -> Self {
        let mut bank = Self {
            pins,
            active_high,
            valves: ValveMix::CLOSED,
            motor: MotorDrive::Off,
        };
        // Ensure everything starts off regardless of reset level
        bank.set_motor(MotorDrive::Off);
        bank.set_valves(ValveMix::CLOSED);
        bank
    }

    /// Last commanded valve mix
    pub fn valves(&self) -> ValveMix {
        self.valves
    }

    /// Last commanded motor drive
    pub fn motor(&self) -> MotorDrive {
        self.motor
    }

    fn drive(pin: &mut P, on: bool, active_high: bool) {
        // Pin errors are not reported to the engine
        let _ = if on == active_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
    }
}

impl<P: OutputPin> Actuators for RelayBank<P> {
    fn set_valves(&mut self, mix: ValveMix) {
        self.valves = mix;
        Self::drive(&mut self.pins.hot, mix.hot, self.active_high);
        Self::drive(&mut self.pins.cold, mix.cold, self.active_high);
    }

    fn set_motor(&mut self, drive: MotorDrive) {
        self.motor = drive;
        let active_high = self.active_high;

        match drive {
            MotorDrive::Off => {
                Self::drive(&mut self.pins.forward, false, active_high);
                Self::drive(&mut self.pins.reverse, false, active_high);
            }
            MotorDrive::Forward => {
                Self::drive(&mut self.pins.reverse, false, active_high);
                Self::drive(&mut self.pins.forward, true, active_high);
            }
            MotorDrive::Reverse => {
                Self::drive(&mut self.pins.forward, false, active_high);
                Self::drive(&mut self.pins.reverse, true, active_high);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(&'static str, bool)>>>;

    /// Mock GPIO pin that records every level change
    struct MockPin {
        name: &'static str,
        high: bool,
        log: Log,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.log.borrow_mut().push((self.name, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.log.borrow_mut().push((self.name, false));
            Ok(())
        }
    }

    fn bank(active_high: bool) -> (RelayBank<MockPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |name| MockPin {
            name,
            high: !active_high,
            log: log.clone(),
        };
        let pins = RelayPins {
            hot: pin("hot"),
            cold: pin("cold"),
            forward: pin("forward"),
            reverse: pin("reverse"),
        };
        let bank = RelayBank::new(pins, active_high);
        log.borrow_mut().clear();
        (bank, log)
    }

    fn levels(bank: &RelayBank<MockPin>) -> [bool; 4] {
        let p = &bank.pins;
        [p.hot.high, p.cold.high, p.forward.high, p.reverse.high]
    }

    #[test]
    fn test_starts_released() {
        let (high_bank, _) = bank(true);
        assert_eq!(levels(&high_bank), [false; 4]);

        let (low_bank, _) = bank(false);
        assert_eq!(levels(&low_bank), [true; 4]);
    }

    #[test]
    fn test_active_high_valves() {
        let (mut bank, _) = bank(true);

        bank.set_valves(ValveMix::HOT_ONLY);
        assert_eq!(levels(&bank), [true, false, false, false]);

        bank.set_valves(ValveMix::BLEND);
        assert_eq!(levels(&bank), [true, true, false, false]);
        assert_eq!(bank.valves(), ValveMix::BLEND);
    }

    #[test]
    fn test_active_low_inverts() {
        let (mut bank, _) = bank(false);

        bank.set_valves(ValveMix::COLD_ONLY);
        bank.set_motor(MotorDrive::Forward);
        assert_eq!(levels(&bank), [true, false, false, true]);

        bank.all_off();
        assert_eq!(levels(&bank), [true; 4]);
    }

    #[test]
    fn test_break_before_make() {
        let (mut bank, log) = bank(true);

        bank.set_motor(MotorDrive::Forward);
        log.borrow_mut().clear();
        bank.set_motor(MotorDrive::Reverse);

        assert_eq!(
            *log.borrow(),
            vec![("forward", false), ("reverse", true)]
        );
        assert_eq!(bank.motor(), MotorDrive::Reverse);
    }

    #[test]
    fn test_windings_never_both_on() {
        let (mut bank, log) = bank(true);
        let drives = [
            MotorDrive::Forward,
            MotorDrive::Reverse,
            MotorDrive::Forward,
            MotorDrive::Off,
            MotorDrive::Reverse,
        ];

        let mut forward = false;
        let mut reverse = false;
        for drive in drives {
            bank.set_motor(drive);
            for (name, level) in log.borrow_mut().drain(..) {
                match name {
                    "forward" => forward = level,
                    "reverse" => reverse = level,
                    _ => {}
                }
                assert!(!(forward && reverse));
            }
        }
    }
}

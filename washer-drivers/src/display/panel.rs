//! SPI character display
//!
//! The panel accepts two frames, each framed by chip select:
//! - `0x01`: clear screen
//! - `[row,col] text`: ASCII text at a position

use core::fmt::Write;

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::String;
use washer_core::traits::{DisplayError, TextPanel};

/// Clear screen command byte
pub const CMD_CLEAR: u8 = 0x01;

/// Longest frame sent in one transaction
pub const MAX_FRAME: usize = 40;

/// Character display on an SPI bus with a manual chip select
pub struct SpiTextPanel<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> SpiTextPanel<SPI, CS> {
    /// Create a panel, leaving chip select deasserted
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        let _ = cs.set_high();
        Self { spi, cs }
    }

    /// Send one frame with chip select held low
    fn transaction(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::ChipSelect)?;

        let result = self
            .spi
            .write(bytes)
            .and_then(|_| self.spi.flush())
            .map_err(|_| DisplayError::Bus);

        // Always release the bus, even after a failed write
        let released = self.cs.set_high().map_err(|_| DisplayError::ChipSelect);
        result.and(released)
    }
}

impl<SPI: SpiBus, CS: OutputPin> TextPanel for SpiTextPanel<SPI, CS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.transaction(&[CMD_CLEAR])
    }

    fn write_line(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        let mut frame: String<MAX_FRAME> = String::new();
        // The prefix is at most 10 bytes
        let _ = write!(frame, "[{},{}] ", row, col);
        for c in text.chars() {
            if frame.push(c).is_err() {
                break;
            }
        }
        self.transaction(frame.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Wire {
        Select(bool),
        Data(Vec<u8>),
    }

    type Trace = Rc<RefCell<Vec<Wire>>>;

    struct MockSpi {
        trace: Trace,
        fail: bool,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = embedded_hal::spi::ErrorKind;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(embedded_hal::spi::ErrorKind::Other);
            }
            self.trace.borrow_mut().push(Wire::Data(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            let copy = words.to_vec();
            self.write(&copy)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockCs {
        trace: Trace,
    }

    impl embedded_hal::digital::ErrorType for MockCs {
        type Error = Infallible;
    }

    impl OutputPin for MockCs {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.trace.borrow_mut().push(Wire::Select(true));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.trace.borrow_mut().push(Wire::Select(false));
            Ok(())
        }
    }

    fn panel(fail: bool) -> (SpiTextPanel<MockSpi, MockCs>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let panel = SpiTextPanel::new(
            MockSpi {
                trace: trace.clone(),
                fail,
            },
            MockCs {
                trace: trace.clone(),
            },
        );
        trace.borrow_mut().clear();
        (panel, trace)
    }

    #[test]
    fn test_clear_frame() {
        let (mut panel, trace) = panel(false);
        panel.clear().unwrap();

        assert_eq!(
            *trace.borrow(),
            vec![
                Wire::Select(true),
                Wire::Data(vec![CMD_CLEAR]),
                Wire::Select(false)
            ]
        );
    }

    #[test]
    fn test_text_frame() {
        let (mut panel, trace) = panel(false);
        panel.write_line(2, 0, "12:00:05").unwrap();

        assert_eq!(
            trace.borrow()[1],
            Wire::Data(b"[2,0] 12:00:05".to_vec())
        );
    }

    #[test]
    fn test_long_text_truncated() {
        let (mut panel, trace) = panel(false);
        let long = "X".repeat(100);
        panel.write_line(10, 15, &long).unwrap();

        let trace = trace.borrow();
        match &trace[1] {
            Wire::Data(bytes) => {
                assert_eq!(bytes.len(), MAX_FRAME);
                assert!(bytes.starts_with(b"[10,15] XXX"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bus_error_releases_cs() {
        let (mut panel, trace) = panel(true);

        assert_eq!(panel.clear(), Err(DisplayError::Bus));
        assert_eq!(
            *trace.borrow(),
            vec![Wire::Select(true), Wire::Select(false)]
        );
    }
}

//! Washer status screen
//!
//! Three text rows:
//! - row 0: phase label
//! - row 1: `Program NN`
//! - row 2: `hh:mm:ss`
//!
//! Rows are padded to the panel width so shorter text overwrites longer.

use core::fmt::Write;

use heapless::String;
use washer_core::state::Phase;
use washer_core::traits::{DisplayError, TextPanel, WasherDisplay};

/// Panel width in characters
pub const COLS: usize = 16;

const ROW_PHASE: u8 = 0;
const ROW_PROGRAM: u8 = 1;
const ROW_TIME: u8 = 2;

/// Status layout on a character panel
pub struct StatusScreen<P> {
    panel: P,
    last_error: Option<DisplayError>,
}

impl<P: TextPanel> StatusScreen<P> {
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            last_error: None,
        }
    }

    /// Blank the panel
    pub fn reset(&mut self) {
        if let Err(e) = self.panel.clear() {
            self.last_error = Some(e);
        }
    }

    /// Take the most recent rendering error, if any
    pub fn take_error(&mut self) -> Option<DisplayError> {
        self.last_error.take()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    fn draw(&mut self, row: u8, text: &str) {
        let mut line: String<COLS> = String::new();
        for c in text.chars().take(COLS) {
            let _ = line.push(c);
        }
        while line.push(' ').is_ok() {}

        if let Err(e) = self.panel.write_line(row, 0, &line) {
            self.last_error = Some(e);
        }
    }

    fn draw_program(&mut self, program: u8) {
        let mut text: String<COLS> = String::new();
        let _ = write!(text, "Program {:02}", program);
        self.draw(ROW_PROGRAM, &text);
    }
}

impl<P: TextPanel> WasherDisplay for StatusScreen<P> {
    fn show_phase(&mut self, phase: Phase, program: u8) {
        self.draw(ROW_PHASE, phase.label());
        self.draw_program(program);
    }

    fn show_selected_program(&mut self, program: u8) {
        self.draw_program(program);
    }

    fn show_time(&mut self, time: &str) {
        self.draw(ROW_TIME, time);
    }
}

//! Debounced push buttons
//!
//! The four front panel buttons are active-low inputs with pull-ups. Each
//! one is polled periodically; a level only counts once it has been stable
//! for the debounce time, and only the released-to-pressed edge produces
//! an event.

use embedded_hal::digital::InputPin;
use heapless::Vec;
use washer_core::state::ButtonEvent;

/// The four button input pins
pub struct ButtonPins<P> {
    pub start: P,
    pub stop: P,
    pub up: P,
    pub down: P,
}

impl<P> ButtonPins<P> {
    fn pin_mut(&mut self, event: ButtonEvent) -> &mut P {
        match event {
            ButtonEvent::Start => &mut self.start,
            ButtonEvent::Stop => &mut self.stop,
            ButtonEvent::Up => &mut self.up,
            ButtonEvent::Down => &mut self.down,
        }
    }
}

/// Stable-level debouncer for one input
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Debounced level (true = pressed)
    stable: bool,
    /// Level seen on the last sample
    candidate: bool,
    /// When the candidate level was first seen (ms)
    since_ms: u32,
}

impl Debouncer {
    /// Feed one sample
    ///
    /// Returns true on a debounced press edge.
    pub fn update(&mut self, pressed: bool, now_ms: u32, debounce_ms: u32) -> bool {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.since_ms = now_ms;
        }

        if self.candidate != self.stable && now_ms.wrapping_sub(self.since_ms) >= debounce_ms {
            self.stable = self.candidate;
            return self.stable;
        }

        false
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}

/// Polled button bank
pub struct ButtonBank<P> {
    pins: ButtonPins<P>,
    debounce_ms: u32,
    /// One debouncer per button, in `ButtonEvent::ALL` order
    debouncers: [Debouncer; 4],
}

impl<P: InputPin> ButtonBank<P> {
    /// Create a button bank
    pub fn new(pins: ButtonPins<P>, debounce_ms: u32) -> Self {
        Self {
            pins,
            debounce_ms,
            debouncers: [Debouncer::default(); 4],
        }
    }

    /// Sample every button once
    ///
    /// Events are returned in priority order: Stop, Start, Up, Down.
    /// A pin that fails to read keeps its previous state.
    pub fn poll(&mut self, now_ms: u32) -> Vec<ButtonEvent, 4> {
        let mut events = Vec::new();

        for (event, debouncer) in ButtonEvent::ALL.iter().zip(self.debouncers.iter_mut()) {
            // Active-low: pressed pulls the line to ground
            let Ok(pressed) = self.pins.pin_mut(*event).is_low() else {
                continue;
            };
            if debouncer.update(pressed, now_ms, self.debounce_ms) {
                // Capacity equals the number of buttons
                let _ = events.push(*event);
            }
        }

        events
    }

    /// Check the debounced level of one button
    pub fn is_pressed(&self, event: ButtonEvent) -> bool {
        ButtonEvent::ALL
            .iter()
            .position(|e| *e == event)
            .map(|i| self.debouncers[i].is_pressed())
            .unwrap_or(false)
    }
}

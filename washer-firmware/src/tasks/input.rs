//! Button input task
//!
//! Polls the front panel buttons and forwards debounced presses to the
//! controller.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::board::Buttons;
use crate::channels::BUTTON_CHANNEL;

use super::now_ms;

/// Input task - polls buttons at a fixed interval
#[embassy_executor::task]
pub async fn input_task(mut buttons: Buttons, poll_interval_ms: u32) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(poll_interval_ms as u64));

    loop {
        ticker.next().await;

        for event in buttons.poll(now_ms()) {
            debug!("Button: {:?}", event);
            // Never block the poll loop on a slow consumer
            if BUTTON_CHANNEL.try_send(event).is_err() {
                warn!("Button queue full, dropping {:?}", event);
            }
        }
    }
}

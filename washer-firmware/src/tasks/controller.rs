//! Main controller task
//!
//! Sole owner of the washer engine. Receives button events and control
//! loop ticks, reads the water temperature, and keeps the clock readout
//! live.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use washer_core::traits::TemperatureSensor;

use crate::board::{Engine, Thermometer};
use crate::channels::BUTTON_CHANNEL;

use super::now_ms;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(
    engine: &'static mut Engine,
    mut sensor: Thermometer,
    loop_period_ms: u32,
) {
    info!("Controller task started");

    let now = now_ms();
    engine.collaborators_mut().display.reset();
    engine.init(now);

    let mut ticker = Ticker::every(Duration::from_millis(loop_period_ms as u64));
    // Last good reading, fed to the engine when the sensor fails
    let mut temp_x10: i16 = 0;
    let mut last_second = now / 1000;

    loop {
        match select(BUTTON_CHANNEL.receive(), ticker.next()).await {
            Either::First(event) => {
                let now = now_ms();
                engine.collaborators_mut().clock.sync(now);

                let before = engine.phase();
                engine.on_button(now, event);
                if engine.phase() != before {
                    info!("{:?}: {:?} -> {:?}", event, before, engine.phase());
                } else {
                    debug!("{:?}: program {}", event, engine.program_index());
                }
            }

            Either::Second(()) => {
                let now = now_ms();

                match sensor.read_celsius_x10() {
                    Ok(t) => temp_x10 = t,
                    Err(e) => warn!("Temperature read failed: {:?}, using {}", e, temp_x10),
                }

                engine.collaborators_mut().clock.sync(now);

                if let Some(phase) = engine.tick(now, temp_x10) {
                    info!("Phase -> {:?} (program {})", phase, engine.program_index());
                } else if now / 1000 != last_second {
                    engine.refresh_time();
                }
                last_second = now / 1000;
            }
        }

        if let Some(e) = engine.collaborators_mut().display.take_error() {
            warn!("Display error: {:?}", e);
        }
    }
}

//! Washer - Washing Machine Controller Firmware
//!
//! Main firmware binary for STM32C031-based washer controllers. Sequences
//! fill, wash, rinse and spin from the front panel buttons, with the
//! fill valve mix chosen from the inlet water temperature.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use washer_core::engine::{Collaborators, WasherEngine};
use washer_drivers::actuator::RelayBank;
use washer_drivers::clock::SoftClock;
use washer_drivers::display::StatusScreen;
use washer_drivers::input::ButtonBank;
use washer_drivers::sensor::LinearAdcSensor;

use crate::board::{Board, Engine};

/// Embedded configuration (compiled into firmware)
/// Edit washer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../washer.toml");

mod board;
mod channels;
mod config;
mod tasks;

// The engine lives for the whole program; the controller task borrows it
static ENGINE: StaticCell<Engine> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Washer firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config(EMBEDDED_CONFIG);

    let board = Board::new(p);

    let outputs = RelayBank::new(board.relays, config.outputs.active_high);
    let buttons = ButtonBank::new(board.buttons, config.input.debounce_ms);
    let sensor = LinearAdcSensor::new(board.adc);
    let screen = StatusScreen::new(board.panel);
    let clock = SoftClock::new(config.clock.start, tasks::now_ms());

    let engine = ENGINE.init(WasherEngine::new(
        config.engine,
        Collaborators::new(outputs, screen, clock),
    ));
    info!("Engine ready");

    spawner
        .spawn(tasks::input_task(buttons, config.input.poll_interval_ms))
        .unwrap();
    spawner
        .spawn(tasks::controller_task(engine, sensor, config.loop_period_ms))
        .unwrap();

    info!("All tasks spawned");
}

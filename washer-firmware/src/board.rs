//! Board wiring for the STM32C031 washer controller
//!
//! | Function        | Pin  |
//! |-----------------|------|
//! | Start button    | PA0  |
//! | Stop button     | PA1  |
//! | Up button       | PA2  |
//! | Down button     | PA3  |
//! | Thermistor ADC  | PA4  |
//! | Display SCK     | PA5  |
//! | Display MOSI    | PA7  |
//! | Display CS      | PB6  |
//! | Motor forward   | PB0  |
//! | Motor reverse   | PB1  |
//! | Hot valve       | PB2  |
//! | Cold valve      | PB3  |
//!
//! Buttons are active-low with internal pull-ups.

use embassy_stm32::adc::{Adc, AdcChannel, AnyAdcChannel, Resolution, SampleTime};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::mode::Blocking;
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_stm32::Peripherals;

use washer_core::engine::WasherEngine;
use washer_drivers::actuator::{RelayBank, RelayPins};
use washer_drivers::clock::SoftClock;
use washer_drivers::display::{SpiTextPanel, StatusScreen};
use washer_drivers::input::{ButtonBank, ButtonPins};
use washer_drivers::sensor::{AdcReader, LinearAdcSensor};

/// Display SPI clock
const DISPLAY_SPI_HZ: u32 = 1_000_000;

pub type Outputs = RelayBank<Output<'static>>;
pub type Buttons = ButtonBank<Input<'static>>;
pub type Panel = SpiTextPanel<Spi<'static, Blocking>, Output<'static>>;
pub type Screen = StatusScreen<Panel>;
pub type Thermometer = LinearAdcSensor<BoardAdc>;
pub type Engine = WasherEngine<Outputs, Screen, SoftClock>;

/// ADC1 with the thermistor channel
pub struct BoardAdc {
    adc: Adc<'static, ADC1>,
    channel: AnyAdcChannel<ADC1>,
}

impl AdcReader for BoardAdc {
    fn read(&mut self) -> Result<u16, ()> {
        Ok(self.adc.blocking_read(&mut self.channel))
    }
}

/// Board peripherals, split by function
pub struct Board {
    pub relays: RelayPins<Output<'static>>,
    pub buttons: ButtonPins<Input<'static>>,
    pub adc: BoardAdc,
    pub panel: Panel,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        // Outputs start low; RelayBank drives them to the released level
        let relays = RelayPins {
            forward: Output::new(p.PB0, Level::Low, Speed::Low),
            reverse: Output::new(p.PB1, Level::Low, Speed::Low),
            hot: Output::new(p.PB2, Level::Low, Speed::Low),
            cold: Output::new(p.PB3, Level::Low, Speed::Low),
        };

        let buttons = ButtonPins {
            start: Input::new(p.PA0, Pull::Up),
            stop: Input::new(p.PA1, Pull::Up),
            up: Input::new(p.PA2, Pull::Up),
            down: Input::new(p.PA3, Pull::Up),
        };

        let adc = BoardAdc {
            adc: Adc::new(p.ADC1, SampleTime::CYCLES160_5, Resolution::BITS12),
            channel: p.PA4.degrade_adc(),
        };

        let mut spi_config = spi::Config::default();
        spi_config.frequency = Hertz(DISPLAY_SPI_HZ);
        let spi = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi_config);
        let cs = Output::new(p.PB6, Level::High, Speed::Low);

        Self {
            relays,
            buttons,
            adc,
            panel: SpiTextPanel::new(spi, cs),
        }
    }
}

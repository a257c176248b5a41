// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! RP2350 implementations of the robot's input and output collaborators.
//!
//! - [`AdcProximitySensor`]: both Sharp-style analog distance sensors on the
//!   on-chip ADC
//! - [`EmbassyClock`]: milliseconds since boot from the Embassy time driver
//! - [`DefmtDisplay`]: status lines over defmt/RTT
//!
//! # Hardware Requirements
//!
//! - Side sensor output on GPIO 26 (ADC0), front sensor output on GPIO 27
//!   (ADC1), both within the ADC's 0-3.3V input range
//! - A debug probe attached for RTT to see status output

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_time::Instant;

use crate::clock::Clock;
use crate::config::PROXIMITY_MIN;
use crate::display::StatusDisplay;
use crate::sensor::{ProximitySensor, SensorChannel, adc_to_proximity};

/// Analog proximity sensors sampled with blocking ADC conversions.
///
/// One conversion takes about 2µs, short enough to sample both channels
/// on every control loop iteration.
pub struct AdcProximitySensor<'a> {
    /// ADC peripheral in blocking mode
    adc: Adc<'a, Blocking>,
    /// Side sensor channel (ADC0)
    side: Channel<'a>,
    /// Front sensor channel (ADC1)
    front: Channel<'a>,
}

impl<'a> AdcProximitySensor<'a> {
    /// Creates a sensor pair from an initialized ADC and its two channels.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    /// let side = Channel::new_pin(p.PIN_26, Pull::None);
    /// let front = Channel::new_pin(p.PIN_27, Pull::None);
    /// let sensors = AdcProximitySensor::new(adc, side, front);
    /// ```
    pub fn new(adc: Adc<'a, Blocking>, side: Channel<'a>, front: Channel<'a>) -> Self {
        Self { adc, side, front }
    }
}

impl ProximitySensor for AdcProximitySensor<'_> {
    /// Samples a channel and scales it to the 10-bit proximity range.
    ///
    /// A failed conversion reads as `PROXIMITY_MIN` (nothing detected).
    fn read_proximity(&mut self, channel: SensorChannel) -> i32 {
        let pin = match channel {
            SensorChannel::Side => &mut self.side,
            SensorChannel::Front => &mut self.front,
        };

        match self.adc.blocking_read(pin) {
            Ok(sample) => adc_to_proximity(sample),
            Err(_) => {
                log_warn!("{} sensor ADC conversion failed", channel.name());
                PROXIMITY_MIN
            }
        }
    }
}

/// Clock backed by the Embassy time driver.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn elapsed_millis(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Status display that writes each line to the defmt log.
///
/// RTT writes do not block when the host is not reading, so this is safe
/// to call from the control loop.
#[derive(Clone, Copy, Default)]
pub struct DefmtDisplay;

impl StatusDisplay for DefmtDisplay {
    fn display_status(&mut self, lines: &[&str]) {
        for (row, line) in lines.iter().enumerate() {
            defmt::info!("lcd[{}] {}", row, *line);
        }
    }
}

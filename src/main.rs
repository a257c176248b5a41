// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! RP2350A Pool Racer firmware
//!
//! Follows objects on the robot's side with a PD controller, turns away from
//! anything directly ahead, and backs up periodically in case it is stuck.
//!
//! # Hardware Configuration
//! - **Microcontroller**: RP2350A (ARM Cortex-M33)
//! - **Motors**: Dual DC motors with H-bridge driver
//!   - Left motor: PWM on GPIO 16 (PWMA), direction on GPIO 17 (AIN2) & GPIO 18 (AIN1)
//!   - Right motor: PWM on GPIO 21 (PWMB), direction on GPIO 19 (BIN1) & GPIO 20 (BIN2)
//! - **Side proximity sensor**: GPIO 26 (ADC0)
//! - **Front proximity sensor**: GPIO 27 (ADC1)
//! - **Status LED**: GPIO 25
//!
//! # Behaviour (highest priority first)
//! - Last second of every 15 s: back up, swinging left
//! - Front reading above 200: turn right in place
//! - Otherwise: PD steering to hold the side reading at 100
//!
//! # Build
//! ```bash
//! cargo build --release --features rp2350 --target thumbv8m.main-none-eabihf
//! ```
//!
//! # Flash
//! ```bash
//! cargo run --release --features rp2350 --target thumbv8m.main-none-eabihf
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use pool_racer::config::{PWM_TOP, STARTUP_SCREEN_MS, STARTUP_TITLE};
use pool_racer::controller::ControlLoop;
use pool_racer::display::StatusDisplay;
use pool_racer::motor::MotorController;
use pool_racer::platform::{AdcProximitySensor, DefmtDisplay, EmbassyClock};
use {defmt_rtt as _, panic_probe as _};

/// Program metadata for picotool info command
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Pool Racer"),
    embassy_rp::binary_info::rp_program_description!(c"RP2350A proximity-following robot"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Main robot task
///
/// Initializes the motors, sensors and status output, shows the startup
/// screen, then hands over to the control loop.
///
/// # Initialization Sequence
/// 1. Configure GPIO and PWM for the H-bridge
/// 2. Configure the ADC and both sensor channels
/// 3. Show the program name, then "Go!"
/// 4. Enter the control loop
///
/// # Safety
/// Never returns. Runs indefinitely until power loss or reset.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RP2350A Pool Racer starting");
    let p = embassy_rp::init(Default::default());

    // Initialize status LED on GPIO 25
    let mut led = Output::new(p.PIN_25, Level::Low);

    // Initialize motor direction control pins
    let left_fwd = Output::new(p.PIN_18, Level::Low); // AIN1
    let left_back = Output::new(p.PIN_17, Level::Low); // AIN2
    let right_fwd = Output::new(p.PIN_19, Level::Low); // BIN1
    let right_back = Output::new(p.PIN_20, Level::Low); // BIN2

    // Configure PWM for motor speed control
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;

    let pwm_left = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone());
    let pwm_right = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, pwm_config.clone());

    let motors = MotorController::new(pwm_left, pwm_right, left_fwd, left_back, right_fwd, right_back);

    // Proximity sensors on ADC0 / ADC1, no pulls on analog inputs
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let side = Channel::new_pin(p.PIN_26, Pull::None);
    let front = Channel::new_pin(p.PIN_27, Pull::None);
    let sensors = AdcProximitySensor::new(adc, side, front);

    let mut display = DefmtDisplay;

    display.display_status(&STARTUP_TITLE);
    Timer::after_millis(STARTUP_SCREEN_MS).await;
    display.display_status(&["Go!"]);

    info!("Robot ready, entering control loop");
    led.set_high();

    let mut control = ControlLoop::new(sensors, motors, EmbassyClock, display);
    control.run()
}

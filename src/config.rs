// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Compiled-in configuration for the pool-racer robot.
//!
//! Every tunable of the firmware lives here; there is no runtime
//! configuration. This module defines:
//! - Controller gains and the proximity set point
//! - Behaviour triggers (front obstacle threshold, stall window)
//! - Fixed motor commands for the reflex behaviours
//! - Sensor and actuator ranges
//! - GPIO pin assignments and PWM parameters
//!
//! # Pin Mapping Summary
//!
//! ## Motors
//! - **Left Motor PWM**: GPIO 16 (PWM_SLICE0 Channel A)
//! - **Left Forward**: GPIO 18 (AIN1)
//! - **Left Backward**: GPIO 17 (AIN2)
//! - **Right Motor PWM**: GPIO 21 (PWM_SLICE2 Channel B)
//! - **Right Forward**: GPIO 19 (BIN1)
//! - **Right Backward**: GPIO 20 (BIN2)
//!
//! ## Sensors
//! - **Side Proximity**: GPIO 26 (ADC0)
//! - **Front Proximity**: GPIO 27 (ADC1)
//!
//! ## Indicators
//! - **Status LED**: GPIO 25 (onboard LED)

// ---------------------------------------------------------------------------
// PD controller
// ---------------------------------------------------------------------------

/// Cruising speed applied to both wheels before the PD correction
pub const BASE_SPEED: i32 = 200;

/// Side proximity the controller steers towards
pub const SET_POINT: i32 = 100;

/// The proportional error is divided by this (truncating toward zero)
pub const PROPORTIONAL_DIVISOR: i32 = 3;

/// The derivative error is multiplied by this
pub const DERIVATIVE_GAIN: i32 = 20;

// ---------------------------------------------------------------------------
// Behaviour triggers
// ---------------------------------------------------------------------------

/// Front readings strictly above this start a turn in place
pub const FRONT_OBSTACLE_THRESHOLD: i32 = 200;

/// Length of one stall-recovery period
pub const STALL_PERIOD_MS: u64 = 15_000;

/// Offset into each stall period after which the robot backs up (exclusive)
pub const STALL_BACKUP_AFTER_MS: u64 = 14_000;

/// Status display refresh interval
pub const DISPLAY_INTERVAL_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Reflex behaviour commands
// ---------------------------------------------------------------------------

/// Left wheel speed while backing out of a stall
pub const BACK_UP_LEFT: i32 = -50;

/// Right wheel speed while backing out of a stall (faster, so the robot swings left)
pub const BACK_UP_RIGHT: i32 = -90;

/// Left wheel speed while turning away from a front obstacle
pub const TURN_LEFT: i32 = 50;

/// Right wheel speed while turning away from a front obstacle
pub const TURN_RIGHT: i32 = -50;

// ---------------------------------------------------------------------------
// Sensor and actuator ranges
// ---------------------------------------------------------------------------

/// Lowest valid proximity reading (nothing in range)
pub const PROXIMITY_MIN: i32 = 0;

/// Highest valid proximity reading (10-bit full scale)
pub const PROXIMITY_MAX: i32 = 1023;

/// Right shift taking a 12-bit RP2350 ADC sample to the 10-bit proximity scale
pub const ADC_TO_PROXIMITY_SHIFT: u32 = 2;

/// Largest wheel speed magnitude the motor driver accepts
pub const MOTOR_SPEED_MAX: i32 = 255;

/// Saturate over-range commands in the control loop before dispatch.
///
/// Off by default: the controller hands its raw command to the motor
/// driver, which clamps at its own level.
pub const SATURATE_MOTOR_COMMANDS: bool = false;

// ---------------------------------------------------------------------------
// Display and startup
// ---------------------------------------------------------------------------

/// Maximum characters per status line
pub const DISPLAY_LINE_CAPACITY: usize = 16;

/// Number of status lines shown at once
pub const DISPLAY_LINES: usize = 2;

/// Program name shown at power-up
pub const STARTUP_TITLE: [&str; DISPLAY_LINES] = ["Pool", "Racer"];

/// How long the startup screen stays up
pub const STARTUP_SCREEN_MS: u64 = 1000;

// ---------------------------------------------------------------------------
// Pins
// ---------------------------------------------------------------------------

/// GPIO pin number for status LED (onboard LED on RP2350)
#[allow(dead_code)]
pub const LED_PIN: u8 = 25;

/// GPIO pin number for the side proximity sensor (ADC0)
#[allow(dead_code)]
pub const SIDE_SENSOR_PIN: u8 = 26;

/// GPIO pin number for the front proximity sensor (ADC1)
#[allow(dead_code)]
pub const FRONT_SENSOR_PIN: u8 = 27;

/// GPIO pin number for left motor PWM (PWMA)
#[allow(dead_code)]
pub const LEFT_MOTOR_PWM_PIN: u8 = 16;

/// GPIO pin number for left motor forward direction (AIN1)
#[allow(dead_code)]
pub const LEFT_MOTOR_FORWARD_PIN: u8 = 18;

/// GPIO pin number for left motor backward direction (AIN2)
#[allow(dead_code)]
pub const LEFT_MOTOR_BACKWARD_PIN: u8 = 17;

/// GPIO pin number for right motor PWM (PWMB)
#[allow(dead_code)]
pub const RIGHT_MOTOR_PWM_PIN: u8 = 21;

/// GPIO pin number for right motor forward direction (BIN1)
#[allow(dead_code)]
pub const RIGHT_MOTOR_FORWARD_PIN: u8 = 19;

/// GPIO pin number for right motor backward direction (BIN2)
#[allow(dead_code)]
pub const RIGHT_MOTOR_BACKWARD_PIN: u8 = 20;

/// PWM top value for 16-bit resolution (maximum duty cycle)
pub const PWM_TOP: u16 = 65535;

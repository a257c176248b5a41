// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Pool racer: a two-wheeled robot that follows whatever is on its side.
//!
//! Two analog proximity sensors drive the robot. The side sensor feeds a
//! proportional-derivative controller that holds the robot at a fixed
//! distance from a wall or object; the front sensor makes it turn away from
//! anything directly ahead; and once every 15 seconds it backs up for a
//! second in case it is stuck.
//!
//! This library holds every control decision and is `no_std`. Hardware is
//! reached only through the collaborator traits:
//!
//! - [`sensor::ProximitySensor`]
//! - [`motor::MotorDriver`]
//! - [`clock::Clock`]
//! - [`display::StatusDisplay`]
//!
//! The firmware binary provides RP2350 implementations (feature `rp2350`);
//! [`mock`] provides host implementations for tests.
//!
//! # Example
//!
//! ```
//! use pool_racer::behavior::Behavior;
//! use pool_racer::controller::ControlLoop;
//! use pool_racer::mock::{MockClock, MockDisplay, MockMotors, MockSensors};
//!
//! let mut control = ControlLoop::new(
//!     MockSensors::new(100, 0),
//!     MockMotors::new(),
//!     MockClock::new(14_500),
//!     MockDisplay::new(),
//! );
//! assert_eq!(control.tick(), Behavior::Stall);
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

pub mod behavior;
pub mod clock;
pub mod command;
pub mod config;
pub mod controller;
pub mod display;
pub mod mock;
pub mod motor;
pub mod pd;
pub mod sensor;

#[cfg(feature = "rp2350")]
pub mod platform;

// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Differential motor commands.
//!
//! A [`MotorCommand`] is a pair of signed wheel speeds on the motor driver's
//! `-255..=255` scale:
//!
//! ```text
//!   left > right   curve right      left < right   curve left
//!   left = -right  spin in place    both < 0       reverse
//! ```
//!
//! Commands produced by the PD controller are not bounded; use
//! [`MotorCommand::check_range`] and [`MotorCommand::saturated`] to detect
//! and clamp over-range values before they reach hardware.

use crate::config::{BACK_UP_LEFT, BACK_UP_RIGHT, TURN_LEFT, TURN_RIGHT};

/// Speeds for the left and right wheel. Positive is forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct MotorCommand {
    /// Left wheel speed
    pub left: i32,
    /// Right wheel speed
    pub right: i32,
}

impl MotorCommand {
    /// Both wheels stopped
    pub const STOP: MotorCommand = MotorCommand::new(0, 0);

    /// Asymmetric reverse used to escape a stall; swings the robot left
    /// while it backs away.
    pub const BACK_UP: MotorCommand = MotorCommand::new(BACK_UP_LEFT, BACK_UP_RIGHT);

    /// Spin to the right about the robot's centre.
    pub const TURN_IN_PLACE: MotorCommand = MotorCommand::new(TURN_LEFT, TURN_RIGHT);

    /// Creates a command from two wheel speeds.
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Checks both wheels against `±limit`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Both speeds are within range
    /// * `Err(overrange)` - At least one wheel exceeds the limit
    ///
    /// # Examples
    ///
    /// ```
    /// use pool_racer::command::MotorCommand;
    ///
    /// assert!(MotorCommand::new(200, 200).check_range(255).is_ok());
    /// assert!(MotorCommand::new(1216, -816).check_range(255).is_err());
    /// ```
    pub fn check_range(&self, limit: i32) -> Result<(), ActuatorOverrange> {
        if self.left.abs() > limit || self.right.abs() > limit {
            Err(ActuatorOverrange {
                command: *self,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Returns the command with each wheel clamped to `-limit..=limit`.
    pub fn saturated(&self, limit: i32) -> Self {
        Self {
            left: self.left.clamp(-limit, limit),
            right: self.right.clamp(-limit, limit),
        }
    }
}

/// A motor command with at least one wheel outside the actuator's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct ActuatorOverrange {
    /// The offending command, as computed
    pub command: MotorCommand,
    /// The magnitude limit it was checked against
    pub limit: i32,
}

// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Motor control for the dual DC motor H-bridge driver.
//!
//! The control loop talks to the motors through [`MotorDriver`], which takes
//! a signed speed per wheel. The RP2350 implementation, [`MotorController`],
//! turns each speed into a direction and a PWM duty cycle:
//!
//! ```text
//!   speed   -255 ...... -1   0   1 ...... 255
//!   dir      Reverse         Coast   Forward
//!   duty     max ...... low  0   low ...... max
//! ```
//!
//! Speeds beyond `±MOTOR_SPEED_MAX` are saturated by the driver.
//!
//! # Motor Pin Configuration
//!
//! ## Left Motor
//! - PWM: PWMA (GPIO 16)
//! - Forward: AIN1 (GPIO 18)
//! - Backward: AIN2 (GPIO 17)
//!
//! ## Right Motor
//! - PWM: PWMB (GPIO 21)
//! - Forward: BIN1 (GPIO 19)
//! - Backward: BIN2 (GPIO 20)

use crate::config::MOTOR_SPEED_MAX;

/// Actuator for the two drive wheels.
pub trait MotorDriver {
    /// Sets both wheel speeds. Fire-and-forget; positive is forward.
    fn set_speeds(&mut self, left: i32, right: i32);
}

impl<T: MotorDriver + ?Sized> MotorDriver for &mut T {
    fn set_speeds(&mut self, left: i32, right: i32) {
        (**self).set_speeds(left, right)
    }
}

/// H-bridge direction for one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum Direction {
    /// Forward pin high, backward pin low
    Forward,
    /// Forward pin low, backward pin high
    Reverse,
    /// Both pins low; the wheel freewheels
    Coast,
}

/// Pin and PWM settings for one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct WheelDrive {
    /// Which direction pin to drive
    pub direction: Direction,
    /// PWM duty cycle, `0..=max_duty`
    pub duty: u16,
}

impl WheelDrive {
    /// Maps a signed wheel speed to H-bridge settings.
    ///
    /// The speed is clamped to `±MOTOR_SPEED_MAX` and scaled linearly so
    /// that `MOTOR_SPEED_MAX` gives `max_duty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pool_racer::motor::{Direction, WheelDrive};
    ///
    /// let drive = WheelDrive::from_speed(-255, 65535);
    /// assert_eq!(drive.direction, Direction::Reverse);
    /// assert_eq!(drive.duty, 65535);
    /// ```
    pub fn from_speed(speed: i32, max_duty: u16) -> Self {
        let speed = speed.clamp(-MOTOR_SPEED_MAX, MOTOR_SPEED_MAX);
        let direction = match speed {
            s if s > 0 => Direction::Forward,
            s if s < 0 => Direction::Reverse,
            _ => Direction::Coast,
        };
        let duty = speed.unsigned_abs() * u32::from(max_duty) / MOTOR_SPEED_MAX.unsigned_abs();

        Self {
            direction,
            duty: duty as u16,
        }
    }
}

#[cfg(feature = "rp2350")]
pub use rp2350::MotorController;

#[cfg(feature = "rp2350")]
mod rp2350 {
    use embassy_rp::gpio::Output;
    use embassy_rp::pwm::{Pwm, SetDutyCycle};

    use super::{Direction, MotorDriver, WheelDrive};

    /// Dual DC motor controller with H-bridge driver support.
    ///
    /// Each wheel gets its own PWM channel for speed and a pair of direction
    /// pins.
    ///
    /// # Safety
    ///
    /// Opposing direction pins of a wheel are never driven high together,
    /// which could damage the H-bridge driver or motors. The PWM output is
    /// zeroed before a direction change.
    pub struct MotorController {
        /// PWM controller for left motor speed
        pwm_left: Pwm<'static>,
        /// PWM controller for right motor speed
        pwm_right: Pwm<'static>,
        /// Left motor forward direction pin (AIN1)
        left_fwd: Output<'static>,
        /// Left motor backward direction pin (AIN2)
        left_back: Output<'static>,
        /// Right motor forward direction pin (BIN1)
        right_fwd: Output<'static>,
        /// Right motor backward direction pin (BIN2)
        right_back: Output<'static>,
    }

    impl MotorController {
        /// Creates a new motor controller with all motors stopped.
        ///
        /// # Arguments
        ///
        /// * `pwm_left` - PWM controller for left motor (PWMA)
        /// * `pwm_right` - PWM controller for right motor (PWMB)
        /// * `left_fwd` - GPIO output for left motor forward (AIN1)
        /// * `left_back` - GPIO output for left motor backward (AIN2)
        /// * `right_fwd` - GPIO output for right motor forward (BIN1)
        /// * `right_back` - GPIO output for right motor backward (BIN2)
        pub fn new(
            pwm_left: Pwm<'static>,
            pwm_right: Pwm<'static>,
            left_fwd: Output<'static>,
            left_back: Output<'static>,
            right_fwd: Output<'static>,
            right_back: Output<'static>,
        ) -> Self {
            let mut motors = Self {
                pwm_left,
                pwm_right,
                left_fwd,
                left_back,
                right_fwd,
                right_back,
            };
            motors.stop();
            motors
        }

        /// Stops both motors immediately.
        ///
        /// Sets PWM duty cycle to zero and disables all direction pins so no
        /// current flows through the H-bridge.
        pub fn stop(&mut self) {
            self.pwm_left.set_duty_cycle(0).ok();
            self.pwm_right.set_duty_cycle(0).ok();
            self.left_fwd.set_low();
            self.left_back.set_low();
            self.right_fwd.set_low();
            self.right_back.set_low();
        }

        fn drive_left(&mut self, speed: i32) {
            let drive = WheelDrive::from_speed(speed, self.pwm_left.max_duty_cycle());
            self.pwm_left.set_duty_cycle(0).ok();
            apply_direction(&mut self.left_fwd, &mut self.left_back, drive.direction);
            self.pwm_left.set_duty_cycle(drive.duty).ok();
        }

        fn drive_right(&mut self, speed: i32) {
            let drive = WheelDrive::from_speed(speed, self.pwm_right.max_duty_cycle());
            self.pwm_right.set_duty_cycle(0).ok();
            apply_direction(&mut self.right_fwd, &mut self.right_back, drive.direction);
            self.pwm_right.set_duty_cycle(drive.duty).ok();
        }
    }

    impl MotorDriver for MotorController {
        fn set_speeds(&mut self, left: i32, right: i32) {
            self.drive_left(left);
            self.drive_right(right);
        }
    }

    /// Drives a direction pin pair, lowering the inactive pin first.
    fn apply_direction(fwd: &mut Output<'static>, back: &mut Output<'static>, direction: Direction) {
        match direction {
            Direction::Forward => {
                back.set_low();
                fwd.set_high();
            }
            Direction::Reverse => {
                fwd.set_low();
                back.set_high();
            }
            Direction::Coast => {
                fwd.set_low();
                back.set_low();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_speed_coasts() {
        let drive = WheelDrive::from_speed(0, 65535);
        assert_eq!(drive.direction, Direction::Coast);
        assert_eq!(drive.duty, 0);
    }

    #[test]
    fn full_speed_is_full_duty() {
        let drive = WheelDrive::from_speed(255, 65535);
        assert_eq!(drive.direction, Direction::Forward);
        assert_eq!(drive.duty, 65535);
    }

    #[test]
    fn duty_scales_linearly() {
        // 200 * 65535 / 255 = 51400
        let drive = WheelDrive::from_speed(200, 65535);
        assert_eq!(drive.duty, 51400);

        let drive = WheelDrive::from_speed(-90, 65535);
        assert_eq!(drive.direction, Direction::Reverse);
        assert_eq!(drive.duty, 23130);
    }

    #[test]
    fn over_range_speed_saturates() {
        assert_eq!(WheelDrive::from_speed(1216, 65535), WheelDrive::from_speed(255, 65535));
        assert_eq!(WheelDrive::from_speed(-816, 65535), WheelDrive::from_speed(-255, 65535));
        assert_eq!(WheelDrive::from_speed(i32::MIN, 1000).duty, 1000);
    }

    #[test]
    fn respects_smaller_pwm_top() {
        let drive = WheelDrive::from_speed(255, 1000);
        assert_eq!(drive.duty, 1000);
    }
}

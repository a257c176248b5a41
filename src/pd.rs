// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Proportional-derivative steering.
//!
//! The controller keeps the side sensor at a fixed proximity by speeding up
//! one wheel and slowing the other by the same amount:
//!
//! ```text
//! proportional = proximity - set_point
//! derivative   = proximity - last_proximity
//! pd           = proportional / 3 + derivative * 20
//! left         = base_speed + pd
//! right        = base_speed - pd
//! ```
//!
//! Division truncates toward zero, as Rust's `/` on integers does. The
//! correction is applied symmetrically, so `left + right` always equals
//! `2 * base_speed`. No clamping happens here.

use crate::command::MotorCommand;
use crate::config::{BASE_SPEED, DERIVATIVE_GAIN, PROPORTIONAL_DIVISOR, SET_POINT};

/// Result of one PD step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdOutput {
    /// Combined proportional + derivative correction
    pub pd: i32,
    /// Wheel speeds to dispatch
    pub command: MotorCommand,
}

/// PD controller over the side proximity reading.
///
/// The controller itself holds only its constants; the previous reading is
/// owned by the caller and passed in on every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdController {
    base_speed: i32,
    set_point: i32,
}

impl PdController {
    /// Creates a controller with the given cruising speed and set point.
    pub const fn new(base_speed: i32, set_point: i32) -> Self {
        Self {
            base_speed,
            set_point,
        }
    }

    /// Cruising speed applied to both wheels before correction
    pub fn base_speed(&self) -> i32 {
        self.base_speed
    }

    /// Target proximity
    pub fn set_point(&self) -> i32 {
        self.set_point
    }

    /// Computes the differential command for one tick.
    ///
    /// # Arguments
    ///
    /// * `proximity` - Current side sensor reading
    /// * `last_proximity` - Side sensor reading used on the previous PD tick
    ///
    /// # Examples
    ///
    /// ```
    /// use pool_racer::command::MotorCommand;
    /// use pool_racer::pd::PdController;
    ///
    /// let pd = PdController::default();
    /// let out = pd.compute(150, 100);
    /// assert_eq!(out.pd, 1016);
    /// assert_eq!(out.command, MotorCommand::new(1216, -816));
    /// ```
    pub fn compute(&self, proximity: i32, last_proximity: i32) -> PdOutput {
        let proportional = proximity - self.set_point;
        let derivative = proximity - last_proximity;

        let pd = proportional / PROPORTIONAL_DIVISOR + derivative * DERIVATIVE_GAIN;

        PdOutput {
            pd,
            command: MotorCommand::new(self.base_speed + pd, self.base_speed - pd),
        }
    }
}

impl Default for PdController {
    fn default() -> Self {
        Self::new(BASE_SPEED, SET_POINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_set_point_cruises_straight() {
        let out = PdController::default().compute(100, 100);
        assert_eq!(out.pd, 0);
        assert_eq!(out.command, MotorCommand::new(200, 200));
    }

    #[test]
    fn approaching_object_steers_away() {
        let out = PdController::default().compute(150, 100);
        assert_eq!(out.pd, 1016);
        assert_eq!(out.command, MotorCommand::new(1216, -816));
    }

    #[test]
    fn proportional_term_truncates_toward_zero() {
        // -1 / 3 == 0, not -1
        let out = PdController::default().compute(99, 99);
        assert_eq!(out.pd, 0);

        // -5 / 3 == -1
        let out = PdController::default().compute(95, 95);
        assert_eq!(out.pd, -1);
        assert_eq!(out.command, MotorCommand::new(199, 201));

        // 5 / 3 == 1
        let out = PdController::default().compute(105, 105);
        assert_eq!(out.pd, 1);
    }

    #[test]
    fn first_tick_uses_zero_history() {
        // proportional -100 / 3 = -33, derivative 0
        let out = PdController::default().compute(0, 0);
        assert_eq!(out.pd, -33);
        assert_eq!(out.command, MotorCommand::new(167, 233));
    }

    #[test]
    fn correction_is_symmetric() {
        let pd = PdController::default();
        for proximity in (-100..=1100).step_by(37) {
            for last in (-100..=1100).step_by(53) {
                let cmd = pd.compute(proximity, last).command;
                assert_eq!(cmd.left + cmd.right, 2 * pd.base_speed());
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let pd = PdController::default();
        assert_eq!(pd.compute(321, 47), pd.compute(321, 47));
    }

    #[test]
    fn custom_constants() {
        let pd = PdController::new(100, 50);
        assert_eq!(pd.base_speed(), 100);
        assert_eq!(pd.set_point(), 50);
        assert_eq!(pd.compute(50, 50).command, MotorCommand::new(100, 100));
    }
}

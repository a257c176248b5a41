// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Behaviour selection.
//!
//! Every tick runs exactly one behaviour, chosen from scratch in strict
//! priority order:
//!
//! 1. [`Behavior::Stall`] while inside the stall-recovery window
//! 2. [`Behavior::Obstacle`] while the front sensor is above threshold
//! 3. [`Behavior::LineFollow`] otherwise
//!
//! There is no stored mode and no hysteresis. The predicates below are pure
//! so the control loop can evaluate them lazily, reading the front sensor
//! only when the stall check has passed.

use crate::config::{FRONT_OBSTACLE_THRESHOLD, STALL_BACKUP_AFTER_MS, STALL_PERIOD_MS};

/// The behaviour executed on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum Behavior {
    /// PD steering on the side sensor
    #[default]
    LineFollow,
    /// Turning in place away from a front obstacle
    Obstacle,
    /// Backing up to free a stuck robot
    Stall,
}

impl Behavior {
    /// Short name for log output
    pub fn label(&self) -> &'static str {
        match self {
            Behavior::LineFollow => "line-follow",
            Behavior::Obstacle => "obstacle",
            Behavior::Stall => "stall",
        }
    }
}

/// True during the last second of every 15 second period.
///
/// The boundary is exclusive: `14_000` is outside the window, `14_001` is in.
///
/// # Examples
///
/// ```
/// use pool_racer::behavior::in_stall_window;
///
/// assert!(in_stall_window(14_500));
/// assert!(!in_stall_window(14_000));
/// assert!(in_stall_window(29_999));
/// ```
pub fn in_stall_window(elapsed_ms: u64) -> bool {
    elapsed_ms % STALL_PERIOD_MS > STALL_BACKUP_AFTER_MS
}

/// True when the front reading indicates something directly ahead.
pub fn is_front_obstacle(front_proximity: i32) -> bool {
    front_proximity > FRONT_OBSTACLE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stall_window_boundaries() {
        assert!(!in_stall_window(0));
        assert!(!in_stall_window(13_999));
        assert!(!in_stall_window(14_000));
        assert!(in_stall_window(14_001));
        assert!(in_stall_window(14_999));
        assert!(!in_stall_window(15_000));
    }

    #[test]
    fn stall_window_repeats_every_period() {
        assert!(in_stall_window(15_000 + 14_500));
        assert!(!in_stall_window(15_000 + 14_000));
        assert!(in_stall_window(10 * 15_000 + 14_001));
    }

    #[test]
    fn front_threshold_is_exclusive() {
        assert!(!is_front_obstacle(200));
        assert!(is_front_obstacle(201));
        assert!(!is_front_obstacle(0));
    }

    #[test]
    fn initial_behaviour_is_line_follow() {
        assert_eq!(Behavior::default(), Behavior::LineFollow);
        assert_eq!(Behavior::Stall.label(), "stall");
    }
}

// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Status display.
//!
//! The robot reports what it is doing on a two-line text display. Updates
//! are best effort: they happen only on 100 ms boundaries and a sink must
//! never block the control loop.
//!
//! # Screens
//!
//! ```text
//!   Stall        Obstacle      Line follow
//!   +--------+   +--------+    +--------+
//!   |Backing |   |Front   |    |142  833|   proximity, pd
//!   |Up      |   |Obstacle|    |1033-633|   left, right
//!   +--------+   +--------+    +--------+
//! ```

use core::fmt::Write;

use heapless::String;

use crate::command::MotorCommand;
use crate::config::{DISPLAY_INTERVAL_MS, DISPLAY_LINE_CAPACITY, DISPLAY_LINES};

/// Sink for textual status updates.
pub trait StatusDisplay {
    /// Replaces the displayed text with `lines`, one entry per row.
    fn display_status(&mut self, lines: &[&str]);
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn display_status(&mut self, lines: &[&str]) {
        (**self).display_status(lines)
    }
}

/// True on ticks where the status display should be refreshed.
pub fn is_display_tick(elapsed_ms: u64) -> bool {
    elapsed_ms % DISPLAY_INTERVAL_MS == 0
}

/// A full screen of status text.
///
/// Each line holds up to `DISPLAY_LINE_CAPACITY` characters; text that does
/// not fit is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLines {
    lines: [String<DISPLAY_LINE_CAPACITY>; DISPLAY_LINES],
}

impl StatusLines {
    /// Builds a screen from fixed text.
    pub fn from_text(first: &str, second: &str) -> Self {
        let mut screen = Self::default();
        screen.lines[0].push_str(first).ok();
        screen.lines[1].push_str(second).ok();
        screen
    }

    /// The lines as string slices, ready for [`StatusDisplay::display_status`]
    pub fn as_strs(&self) -> [&str; DISPLAY_LINES] {
        [self.lines[0].as_str(), self.lines[1].as_str()]
    }

    /// Shows this screen on `display`.
    pub fn show<D: StatusDisplay + ?Sized>(&self, display: &mut D) {
        display.display_status(&self.as_strs());
    }
}

/// Screen for the stall-recovery behaviour
pub fn back_up_status() -> StatusLines {
    StatusLines::from_text("Backing", "Up")
}

/// Screen for the obstacle behaviour
pub fn obstacle_status() -> StatusLines {
    StatusLines::from_text("Front", "Obstacle")
}

/// Screen for the line-follow behaviour.
///
/// Line one shows the proximity at column 0 and the PD term at column 5;
/// line two shows the left speed at column 0 and the right speed at column 4.
pub fn line_follow_status(proximity: i32, pd: i32, command: MotorCommand) -> StatusLines {
    let mut screen = StatusLines::default();
    write!(screen.lines[0], "{:<5}{}", proximity, pd).ok();
    write!(screen.lines[1], "{:<4}{}", command.left, command.right).ok();
    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_cadence() {
        assert!(is_display_tick(0));
        assert!(is_display_tick(100));
        assert!(is_display_tick(14_500));
        assert!(!is_display_tick(1));
        assert!(!is_display_tick(99));
        assert!(!is_display_tick(14_501));
    }

    #[test]
    fn reflex_screens() {
        assert_eq!(back_up_status().as_strs(), ["Backing", "Up"]);
        assert_eq!(obstacle_status().as_strs(), ["Front", "Obstacle"]);
    }

    #[test]
    fn line_follow_columns() {
        let screen = line_follow_status(142, 833, MotorCommand::new(1033, -633));
        assert_eq!(screen.as_strs(), ["142  833", "1033-633"]);

        let screen = line_follow_status(100, 0, MotorCommand::new(200, 200));
        assert_eq!(screen.as_strs(), ["100  0", "200 200"]);
    }

    #[test]
    fn long_text_is_dropped_not_panicking() {
        let screen = StatusLines::from_text("this line is far too long", "ok");
        assert_eq!(screen.as_strs()[1], "ok");
        assert!(screen.as_strs()[0].len() <= DISPLAY_LINE_CAPACITY);
    }
}

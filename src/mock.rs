// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Host-side stand-ins for the robot's hardware.
//!
//! These doubles implement every collaborator trait with plain fields so the
//! control loop can be exercised deterministically in tests. They are
//! `no_std` and always compiled, so integration tests and doc examples can
//! use them too.

use core::cell::Cell;

use crate::clock::Clock;
use crate::command::MotorCommand;
use crate::display::{StatusDisplay, StatusLines};
use crate::motor::MotorDriver;
use crate::sensor::{ProximitySensor, SensorChannel};

/// Proximity sensors returning fixed, settable values.
#[derive(Debug, Clone, Default)]
pub struct MockSensors {
    side: i32,
    front: i32,
    side_reads: usize,
    front_reads: usize,
}

impl MockSensors {
    /// Creates sensors that report `side` and `front` until changed.
    pub fn new(side: i32, front: i32) -> Self {
        Self {
            side,
            front,
            ..Self::default()
        }
    }

    /// Changes the value reported on `channel`.
    pub fn set(&mut self, channel: SensorChannel, value: i32) {
        match channel {
            SensorChannel::Side => self.side = value,
            SensorChannel::Front => self.front = value,
        }
    }

    /// How many times `channel` has been sampled
    pub fn reads(&self, channel: SensorChannel) -> usize {
        match channel {
            SensorChannel::Side => self.side_reads,
            SensorChannel::Front => self.front_reads,
        }
    }
}

impl ProximitySensor for MockSensors {
    fn read_proximity(&mut self, channel: SensorChannel) -> i32 {
        match channel {
            SensorChannel::Side => {
                self.side_reads += 1;
                self.side
            }
            SensorChannel::Front => {
                self.front_reads += 1;
                self.front
            }
        }
    }
}

/// Motors that remember the most recent command.
#[derive(Debug, Clone, Default)]
pub struct MockMotors {
    last: Option<MotorCommand>,
    writes: usize,
}

impl MockMotors {
    /// Creates motors that have not been commanded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last command written, if any
    pub fn last(&self) -> Option<MotorCommand> {
        self.last
    }

    /// Number of `set_speeds` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl MotorDriver for MockMotors {
    fn set_speeds(&mut self, left: i32, right: i32) {
        self.last = Some(MotorCommand::new(left, right));
        self.writes += 1;
    }
}

/// Clock whose time is set by the test.
///
/// Time is held in a `Cell` so it can be moved while the control loop
/// holds the clock.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now_ms: Cell<u64>,
}

impl MockClock {
    /// Creates a clock reading `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Jumps to an absolute time.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    /// Moves time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for MockClock {
    fn elapsed_millis(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Display that keeps the last screen shown.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    last: Option<StatusLines>,
    updates: usize,
}

impl MockDisplay {
    /// Creates a blank display.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent screen, if anything was shown
    pub fn last(&self) -> Option<&StatusLines> {
        self.last.as_ref()
    }

    /// Number of `display_status` calls so far
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl StatusDisplay for MockDisplay {
    fn display_status(&mut self, lines: &[&str]) {
        let first = lines.first().copied().unwrap_or_default();
        let second = lines.get(1).copied().unwrap_or_default();
        self.last = Some(StatusLines::from_text(first, second));
        self.updates += 1;
    }
}

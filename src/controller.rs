// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Robot control loop.
//!
//! [`ControlLoop`] owns the robot's collaborators and its only piece of
//! mutable state, the previous side reading. Each call to
//! [`ControlLoop::tick`] samples the clock once and runs exactly one
//! behaviour:
//!
//! ```text
//!   now % 15000 > 14000 ? ──yes──> back up      (-50, -90)
//!          │no
//!   front > 200 ?        ──yes──> turn in place (50, -50)
//!          │no
//!   side reading ──> PD ──> set_speeds ──> remember reading
//! ```
//!
//! The status display is refreshed on ticks whose time sample falls on a
//! 100 ms boundary.
//!
//! # Fault Handling
//!
//! - Out-of-range sensor readings are logged and clamped.
//! - Over-range motor commands are logged, and saturated only when
//!   saturation is enabled (off by default; the motor driver clamps).

use crate::behavior::{self, Behavior};
use crate::clock::Clock;
use crate::command::MotorCommand;
use crate::config::{MOTOR_SPEED_MAX, SATURATE_MOTOR_COMMANDS};
use crate::display::{self, StatusDisplay};
use crate::motor::MotorDriver;
use crate::pd::PdController;
use crate::sensor::{self, ProximitySensor, SensorChannel};

/// State carried from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RobotState {
    /// Side reading used by the most recent line-follow tick; starts at 0
    pub last_proximity: i32,
}

/// The robot's single control loop.
pub struct ControlLoop<S, M, C, D> {
    sensors: S,
    motors: M,
    clock: C,
    display: D,
    pd: PdController,
    state: RobotState,
    saturate: bool,
    last_behavior: Option<Behavior>,
}

impl<S, M, C, D> ControlLoop<S, M, C, D>
where
    S: ProximitySensor,
    M: MotorDriver,
    C: Clock,
    D: StatusDisplay,
{
    /// Creates a control loop with the default PD constants and a zeroed state.
    ///
    /// # Examples
    ///
    /// ```
    /// use pool_racer::controller::ControlLoop;
    /// use pool_racer::mock::{MockClock, MockDisplay, MockMotors, MockSensors};
    ///
    /// let mut control = ControlLoop::new(
    ///     MockSensors::new(100, 0),
    ///     MockMotors::new(),
    ///     MockClock::new(1),
    ///     MockDisplay::new(),
    /// );
    /// control.tick();
    /// ```
    pub fn new(sensors: S, motors: M, clock: C, display: D) -> Self {
        Self {
            sensors,
            motors,
            clock,
            display,
            pd: PdController::default(),
            state: RobotState::default(),
            saturate: SATURATE_MOTOR_COMMANDS,
            last_behavior: None,
        }
    }

    /// Replaces the PD controller.
    pub fn with_pd(mut self, pd: PdController) -> Self {
        self.pd = pd;
        self
    }

    /// Enables or disables saturating commands to `±MOTOR_SPEED_MAX`
    /// before they are dispatched.
    pub fn with_saturation(mut self, saturate: bool) -> Self {
        self.saturate = saturate;
        self
    }

    /// Current loop state
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Sensor collaborator
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Mutable sensor collaborator
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Motor collaborator
    pub fn motors(&self) -> &M {
        &self.motors
    }

    /// Clock collaborator
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Display collaborator
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs one iteration and reports which behaviour ran.
    pub fn tick(&mut self) -> Behavior {
        let now = self.clock.elapsed_millis();
        let refresh = display::is_display_tick(now);

        let behavior = if behavior::in_stall_window(now) {
            self.back_up(refresh);
            Behavior::Stall
        } else if behavior::is_front_obstacle(self.read(SensorChannel::Front)) {
            self.turn_in_place(refresh);
            Behavior::Obstacle
        } else {
            self.follow(refresh);
            Behavior::LineFollow
        };

        if self.last_behavior != Some(behavior) {
            log_info!("t={}ms behaviour: {}", now, behavior.label());
            self.last_behavior = Some(behavior);
        }
        behavior
    }

    /// Runs forever.
    pub fn run(&mut self) -> ! {
        log_info!("control loop running");
        loop {
            self.tick();
        }
    }

    /// Runs until `stop` returns true, then stops both motors.
    ///
    /// `stop` is checked before every tick.
    pub fn run_until<F: FnMut() -> bool>(&mut self, mut stop: F) {
        log_info!("control loop running");
        while !stop() {
            self.tick();
        }
        self.motors.set_speeds(MotorCommand::STOP.left, MotorCommand::STOP.right);
        log_info!("control loop stopped, motors off");
    }

    fn back_up(&mut self, refresh: bool) {
        if refresh {
            display::back_up_status().show(&mut self.display);
        }
        self.dispatch(MotorCommand::BACK_UP);
    }

    fn turn_in_place(&mut self, refresh: bool) {
        if refresh {
            display::obstacle_status().show(&mut self.display);
        }
        self.dispatch(MotorCommand::TURN_IN_PLACE);
    }

    fn follow(&mut self, refresh: bool) {
        let proximity = self.read(SensorChannel::Side);
        let output = self.pd.compute(proximity, self.state.last_proximity);

        self.dispatch(output.command);

        if refresh {
            display::line_follow_status(proximity, output.pd, output.command).show(&mut self.display);
        }

        self.state.last_proximity = proximity;
    }

    /// Reads a channel, clamping out-of-range values.
    fn read(&mut self, channel: SensorChannel) -> i32 {
        let raw = self.sensors.read_proximity(channel);
        match sensor::check_reading(raw) {
            Ok(reading) => reading,
            Err(fault) => {
                log_warn!(
                    "{} sensor out of range: {} (using {})",
                    channel.name(),
                    fault.raw(),
                    fault.clamped()
                );
                fault.clamped()
            }
        }
    }

    fn dispatch(&mut self, command: MotorCommand) {
        let command = match command.check_range(MOTOR_SPEED_MAX) {
            Ok(()) => command,
            Err(over) => {
                log_debug!(
                    "motor command over range: ({}, {}) limit {}",
                    over.command.left,
                    over.command.right,
                    over.limit
                );
                if self.saturate {
                    command.saturated(MOTOR_SPEED_MAX)
                } else {
                    command
                }
            }
        };
        self.motors.set_speeds(command.left, command.right);
    }
}

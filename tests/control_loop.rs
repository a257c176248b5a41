// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! End-to-end behaviour of the control loop against mock hardware.

use pool_racer::behavior::Behavior;
use pool_racer::command::MotorCommand;
use pool_racer::controller::ControlLoop;
use pool_racer::mock::{MockClock, MockDisplay, MockMotors, MockSensors};
use pool_racer::sensor::SensorChannel;

type MockLoop = ControlLoop<MockSensors, MockMotors, MockClock, MockDisplay>;

fn robot(side: i32, front: i32, now_ms: u64) -> MockLoop {
    ControlLoop::new(
        MockSensors::new(side, front),
        MockMotors::new(),
        MockClock::new(now_ms),
        MockDisplay::new(),
    )
}

#[test]
fn cruises_straight_on_the_set_point() {
    let mut control = robot(100, 0, 1);
    control.tick();
    // First tick sees a jump from 0 to 100; the second sees no change.
    control.tick();
    assert_eq!(control.motors().last(), Some(MotorCommand::new(200, 200)));
}

#[test]
fn approaching_object_produces_reference_command() {
    let mut control = robot(100, 0, 1);
    control.tick();

    control.sensors_mut().set(SensorChannel::Side, 150);
    assert_eq!(control.tick(), Behavior::LineFollow);
    assert_eq!(control.motors().last(), Some(MotorCommand::new(1216, -816)));
    assert_eq!(control.state().last_proximity, 150);
}

#[test]
fn stall_window_backs_up_regardless_of_sensors() {
    let mut control = robot(650, 900, 14_500);
    assert_eq!(control.tick(), Behavior::Stall);
    assert_eq!(control.motors().last(), Some(MotorCommand::BACK_UP));
    assert_eq!(control.sensors().reads(SensorChannel::Front), 0);
    assert_eq!(control.sensors().reads(SensorChannel::Side), 0);
}

#[test]
fn stall_window_boundary_is_exclusive() {
    let mut control = robot(100, 0, 14_000);
    assert_eq!(control.tick(), Behavior::LineFollow);

    control.clock().set(14_001);
    assert_eq!(control.tick(), Behavior::Stall);

    control.clock().set(15_000);
    assert_eq!(control.tick(), Behavior::LineFollow);
}

#[test]
fn stall_takes_priority_over_obstacle() {
    let mut control = robot(100, 201, 14_500);
    assert_eq!(control.tick(), Behavior::Stall);
    assert_eq!(control.motors().last(), Some(MotorCommand::new(-50, -90)));
}

#[test]
fn front_obstacle_turns_in_place_without_reading_side() {
    let mut control = robot(100, 201, 1);
    assert_eq!(control.tick(), Behavior::Obstacle);
    assert_eq!(control.motors().last(), Some(MotorCommand::new(50, -50)));
    assert_eq!(control.sensors().reads(SensorChannel::Front), 1);
    assert_eq!(control.sensors().reads(SensorChannel::Side), 0);
    assert_eq!(control.state().last_proximity, 0);
}

#[test]
fn front_threshold_itself_is_clear() {
    let mut control = robot(100, 200, 1);
    assert_eq!(control.tick(), Behavior::LineFollow);
}

#[test]
fn exactly_one_motor_write_per_tick() {
    let mut control = robot(100, 0, 1);
    let times = [1, 100, 14_001, 14_999, 20_000];
    let fronts = [0, 300, 0, 300, 0];

    for (i, (&t, &front)) in times.iter().zip(fronts.iter()).enumerate() {
        control.clock().set(t);
        control.sensors_mut().set(SensorChannel::Front, front);
        control.tick();
        assert_eq!(control.motors().writes(), i + 1);
    }
}

#[test]
fn behaviour_is_reevaluated_every_tick() {
    let mut control = robot(100, 300, 1);
    assert_eq!(control.tick(), Behavior::Obstacle);

    control.sensors_mut().set(SensorChannel::Front, 0);
    assert_eq!(control.tick(), Behavior::LineFollow);

    control.clock().set(14_200);
    assert_eq!(control.tick(), Behavior::Stall);

    control.clock().set(15_200);
    assert_eq!(control.tick(), Behavior::LineFollow);
}

#[test]
fn display_refreshes_only_on_100ms_boundaries() {
    let mut control = robot(100, 0, 0);

    for t in 0..=1000u64 {
        control.clock().set(t);
        control.tick();
    }

    // 0, 100, ..., 1000
    assert_eq!(control.display().updates(), 11);
}

#[test]
fn display_shows_behaviour_status() {
    let mut control = robot(100, 0, 14_100);
    control.tick();
    assert_eq!(control.display().last().map(|s| s.as_strs()), Some(["Backing", "Up"]));

    control.clock().set(200);
    control.sensors_mut().set(SensorChannel::Front, 500);
    control.tick();
    assert_eq!(control.display().last().map(|s| s.as_strs()), Some(["Front", "Obstacle"]));

    control.sensors_mut().set(SensorChannel::Front, 0);
    control.clock().set(300);
    control.tick();
    // last_proximity was 0, so pd = 0 + 100 * 20 = 2000
    assert_eq!(control.display().last().map(|s| s.as_strs()), Some(["100  2000", "2200-1800"]));
}

#[test]
fn no_display_between_boundaries() {
    let mut control = robot(100, 300, 101);
    control.tick();
    control.clock().set(14_501);
    control.tick();
    control.clock().set(1_250);
    control.sensors_mut().set(SensorChannel::Front, 0);
    control.tick();
    assert_eq!(control.display().updates(), 0);
}

#[test]
fn run_until_stops_motors() {
    let mut control = robot(150, 0, 1);
    let mut remaining = 5;
    control.run_until(|| {
        if remaining == 0 {
            true
        } else {
            remaining -= 1;
            false
        }
    });

    // five ticks plus the final stop
    assert_eq!(control.motors().writes(), 6);
    assert_eq!(control.motors().last(), Some(MotorCommand::STOP));
    assert_eq!(control.state().last_proximity, 150);
}

#[test]
fn run_until_with_immediate_stop_only_stops() {
    let mut control = robot(100, 0, 1);
    control.run_until(|| true);
    assert_eq!(control.motors().writes(), 1);
    assert_eq!(control.motors().last(), Some(MotorCommand::STOP));
    assert_eq!(control.sensors().reads(SensorChannel::Front), 0);
}

#[test]
fn advancing_clock_walks_into_the_stall_window() {
    let mut control = robot(100, 0, 13_900);
    let mut behaviours = Vec::new();
    for _ in 0..4 {
        behaviours.push(control.tick());
        control.clock().advance(50);
    }
    // 13_900, 13_950, 14_000, 14_050
    assert_eq!(
        behaviours,
        [Behavior::LineFollow, Behavior::LineFollow, Behavior::LineFollow, Behavior::Stall]
    );
}

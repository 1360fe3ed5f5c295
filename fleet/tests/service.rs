use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;

use fleet::service;
use fleet::{Call, Config, Direction, Elevator, ServiceError};

const FAST: f64 = 0.1;

fn wait_for(handle: &fleet::FleetHandle, done: impl Fn(&[Elevator]) -> bool) -> Vec<Elevator> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let snapshot = handle.snapshot().unwrap();
        if done(snapshot.as_slice()) || Instant::now() > deadline {
            return snapshot;
        }
        thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn commands_are_visible_to_the_next_snapshot() {
    // slow ticks so nothing moves during the test
    let (handle, _thread) = service::spawn(Config::new(6, 2, 60.0), None).unwrap();
    handle.call_elevator(4, Call::HallDown).unwrap();
    handle.select_floor(1, 3).unwrap();

    let snapshot = handle.snapshot().unwrap();
    assert_eq!(snapshot[0].destination_floor, Some(4));
    assert_eq!(snapshot[0].direction, Direction::Down);
    assert_eq!(snapshot[1].destination_floor, Some(3));
    assert_eq!(snapshot[1].direction, Direction::Up);
    handle.shutdown().unwrap();
}

#[test]
fn ticks_carry_elevator_to_caller() {
    let (handle, _thread) = service::spawn(Config::new(6, 1, FAST), None).unwrap();
    handle.call_elevator(3, Call::HallUp).unwrap();

    let snapshot = wait_for(&handle, |elevators| elevators[0].is_idle());
    assert_eq!(snapshot[0].current_floor, 3);
    assert_eq!(snapshot[0].floors_traversed, 3);
    handle.shutdown().unwrap();
}

#[test]
fn subscriber_sees_every_change() {
    let (snapshot_tx, snapshot_rx) = unbounded();
    let (handle, _thread) = service::spawn(Config::new(6, 1, 60.0), Some(snapshot_tx)).unwrap();
    handle.select_floor(0, 2).unwrap();

    let published = snapshot_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(published[0].destination_floor, Some(2));
    handle.shutdown().unwrap();
}

#[test]
fn configure_resets_and_reports_clamped_config() {
    let (handle, _thread) = service::spawn(Config::new(6, 5, 60.0), None).unwrap();
    handle.call_elevator(2, Call::HallUp).unwrap();
    handle.configure(Config { total_floors: 6, total_elevators: 3, floor_travel_time: 60.0 }).unwrap();

    assert_eq!(handle.snapshot().unwrap(), (0..3).map(Elevator::new).collect::<Vec<_>>());

    handle.configure(Config { total_floors: 40, total_elevators: 3, floor_travel_time: 30.0 }).unwrap();
    let config = handle.config().unwrap();
    assert_eq!(config.total_floors, 10);
    assert_eq!(config.floor_travel_time, 30.0);
    handle.shutdown().unwrap();
}

#[test]
fn faster_travel_time_takes_effect() {
    let (handle, _thread) = service::spawn(Config::new(6, 1, 60.0), None).unwrap();
    handle.select_floor(0, 2).unwrap();
    handle.configure(Config::new(6, 1, FAST)).unwrap();

    let snapshot = wait_for(&handle, |elevators| elevators[0].is_idle());
    assert_eq!(snapshot[0].current_floor, 2);
    handle.shutdown().unwrap();
}

#[test]
fn handle_reports_stopped_service() {
    let (handle, thread) = service::spawn(Config::default(), None).unwrap();
    handle.shutdown().unwrap();
    thread.join().unwrap();

    assert_eq!(handle.call_elevator(1, Call::HallUp), Err(ServiceError::Disconnected));
    assert_eq!(handle.snapshot(), Err(ServiceError::Disconnected));
}

/// ----- MOTION ENGINE -----
/// Advances a single elevator by one tick. Every elevator moves at most one
/// floor per tick, and on reaching its destination either takes the next
/// stop from its queue or parks.

use crate::direction::Direction;
use crate::elevator::Elevator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No destination, nothing happened.
    Idle,
    /// Moved one floor towards the destination.
    Moved { from: u8, to: u8 },
    /// At the destination, took the next stop off the queue.
    NextStop { floor: u8 },
    /// At the destination with nothing queued, now idle.
    Parked { floor: u8 },
}

pub fn step(elevator: &mut Elevator) -> Transition {
    let destination = match elevator.destination_floor {
        Some(floor) => floor,
        None => return Transition::Idle,
    };
    let floor = elevator.current_floor;

    if floor == destination {
        if elevator.queue.is_empty() {
            elevator.destination_floor = None;
            elevator.direction = Direction::Idle;
            Transition::Parked { floor }
        } else {
            let next = elevator.queue.remove(0);
            elevator.dispatch(next, Direction::towards(floor, next));
            Transition::NextStop { floor: next }
        }
    } else {
        let (to, direction) = if floor < destination {
            (floor + 1, Direction::Up)
        } else {
            (floor - 1, Direction::Down)
        };
        elevator.current_floor = to;
        elevator.direction = direction;
        elevator.floors_traversed += 1;
        Transition::Moved { from: floor, to }
    }
}

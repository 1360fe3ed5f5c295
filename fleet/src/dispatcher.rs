/// ----- DISPATCHER -----
/// This stateless module decides which elevator answers a hall call. Every
/// elevator gets a score (lower is better) and the first elevator with the
/// lowest score wins. The caller owns the memory of the last assignment and
/// passes it in, so the result only depends on the arguments.

use crate::call::Call;
use crate::elevator::Elevator;

const QUEUE_WEIGHT: i32 = 2;
const IDLE_BONUS: i32 = 3;
const EN_ROUTE_BONUS: i32 = 2;
const REPEAT_PENALTY: i32 = 5;

pub fn score(
    elevator: &Elevator,
    from_floor: u8,
    call: Call,
    last_assigned: Option<usize>,
) -> i32 {
    let distance = (elevator.current_floor as i32 - from_floor as i32).abs();
    let mut score = distance + QUEUE_WEIGHT * elevator.pending_stops() as i32;

    if elevator.is_idle() {
        score -= IDLE_BONUS;
    }
    if elevator.is_approaching(from_floor, call.direction()) {
        score -= EN_ROUTE_BONUS;
    }
    if last_assigned == Some(elevator.id) {
        score += REPEAT_PENALTY;
    }
    score
}

/// Index of the elevator that should serve a call from `from_floor`, or `None`
/// if the floor does not exist or there are no elevators.
pub fn select_elevator(
    from_floor: u8,
    call: Call,
    elevators: &[Elevator],
    last_assigned: Option<usize>,
    num_floors: u8,
) -> Option<usize> {
    if from_floor >= num_floors {
        return None;
    }
    let mut best: Option<(usize, i32)> = None;
    for (index, elevator) in elevators.iter().enumerate() {
        let score = score(elevator, from_floor, call, last_assigned);
        match best {
            Some((_, best_score)) if score >= best_score => {},
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

use crate::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Elevator {
    pub id: usize,
    pub current_floor: u8,
    pub direction: Direction,
    pub destination_floor: Option<u8>,
    /// Pending stops, hall calls and cab selections merged into one list.
    pub queue: Vec<u8>,
    pub floors_traversed: u32,
}

impl Elevator {
    pub fn new(id: usize) -> Self {
        Elevator {
            id: id,
            current_floor: 0,
            direction: Direction::Idle,
            destination_floor: None,
            queue: Vec::new(),
            floors_traversed: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    /// Starts the elevator towards `floor`, labelled with `direction`.
    pub fn dispatch(&mut self, floor: u8, direction: Direction) {
        self.destination_floor = Some(floor);
        self.direction = direction;
    }

    /// Adds a stop and re-sorts the whole queue in the current direction of travel.
    pub fn enqueue(&mut self, floor: u8) {
        self.queue.push(floor);
        let direction = self.direction;
        self.queue.sort_by(|a, b| direction.queue_order(a, b));
    }

    /// True while travelling in `direction` without having gone past `floor` yet.
    pub fn is_approaching(&self, floor: u8, direction: Direction) -> bool {
        match (self.direction, direction) {
            (Direction::Up, Direction::Up) => self.current_floor <= floor,
            (Direction::Down, Direction::Down) => self.current_floor >= floor,
            _ => false,
        }
    }

    pub fn pending_stops(&self) -> usize {
        self.queue.len()
    }
}

/// ----- FLEET CONTROLLER -----
/// Owns every elevator together with the configuration and the memory of the
/// last assignment. All mutations go through here; out-of-range input is
/// dropped without touching any state.

use tracing::{debug, info};

use crate::call::Call;
use crate::config::Config;
use crate::direction::Direction;
use crate::dispatcher;
use crate::elevator::Elevator;
use crate::motion::{self, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconfiguration {
    Unchanged,
    /// Only the travel time changed, the motion timer must be restarted.
    TravelTime,
    /// Floors or elevators changed, the fleet was rebuilt from scratch.
    Reset,
}

#[derive(Debug, Clone)]
pub struct Fleet {
    config: Config,
    elevators: Vec<Elevator>,
    last_assigned: Option<usize>,
}

fn initialize_elevators(total_elevators: u8) -> Vec<Elevator> {
    (0..total_elevators as usize).map(Elevator::new).collect()
}

impl Fleet {
    pub fn new(config: Config) -> Self {
        let config = config.validated();
        Fleet {
            config: config,
            elevators: initialize_elevators(config.total_elevators),
            last_assigned: None,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn last_assigned(&self) -> Option<usize> {
        self.last_assigned
    }

    pub fn snapshot(&self) -> Vec<Elevator> {
        self.elevators.clone()
    }

    pub fn configure(&mut self, new_config: Config) -> Reconfiguration {
        let new_config = new_config.validated();
        let old_config = self.config;
        self.config = new_config;

        if old_config.requires_reset(&new_config) {
            self.elevators = initialize_elevators(new_config.total_elevators);
            self.last_assigned = None;
            info!(
                floors = new_config.total_floors,
                elevators = new_config.total_elevators,
                "fleet reset"
            );
            Reconfiguration::Reset
        } else if old_config.floor_travel_time != new_config.floor_travel_time {
            info!(travel_time = new_config.floor_travel_time, "floor travel time changed");
            Reconfiguration::TravelTime
        } else {
            Reconfiguration::Unchanged
        }
    }

    /// Assigns a hall call to the best scoring elevator.
    pub fn call_elevator(&mut self, from_floor: u8, call: Call) {
        if from_floor >= self.config.total_floors {
            debug!(from_floor, "dropping hall call for nonexistent floor");
            return;
        }
        let index = match dispatcher::select_elevator(
            from_floor,
            call,
            &self.elevators,
            self.last_assigned,
            self.config.total_floors,
        ) {
            Some(index) => index,
            None => return,
        };
        self.last_assigned = Some(index);

        let elevator = &mut self.elevators[index];
        if elevator.is_idle() {
            elevator.dispatch(from_floor, call.direction());
        } else {
            elevator.enqueue(from_floor);
        }
        info!(elevator = index, from_floor, direction = %call.direction().as_string(), "hall call assigned");
    }

    /// Registers a floor chosen from inside an elevator.
    pub fn select_floor(&mut self, elevator_id: usize, target_floor: u8) {
        if target_floor >= self.config.total_floors {
            debug!(elevator_id, target_floor, "dropping selection of nonexistent floor");
            return;
        }
        let elevator = match self.elevators.get_mut(elevator_id) {
            Some(elevator) => elevator,
            None => {
                debug!(elevator_id, "dropping selection for unknown elevator");
                return;
            },
        };
        if elevator.destination_floor.is_none() {
            let direction = Direction::towards(elevator.current_floor, target_floor);
            elevator.dispatch(target_floor, direction);
        } else {
            elevator.enqueue(target_floor);
        }
    }

    /// Advances every elevator by one floor-travel interval.
    pub fn tick(&mut self) -> Vec<Transition> {
        self.elevators
            .iter_mut()
            .map(|elevator| {
                let transition = motion::step(elevator);
                if transition != Transition::Idle {
                    debug!(elevator = elevator.id, ?transition, "tick");
                }
                transition
            })
            .collect()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::new(Config::default())
    }
}

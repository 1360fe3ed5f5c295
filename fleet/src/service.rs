/// ----- FLEET SERVICE -----
/// Runs the fleet on a single owner thread. Calls, selections and
/// configuration changes arrive on a channel and are applied in order,
/// interleaved with the motion ticks, so no two mutations ever overlap.
/// Snapshots leave the thread as owned copies.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, select, tick, unbounded, Receiver, Sender};
use tracing::{debug, info};

use crate::call::Call;
use crate::config::Config;
use crate::elevator::Elevator;
use crate::error::ServiceError;
use crate::fleet::{Fleet, Reconfiguration};

pub enum Command {
    Configure(Config),
    CallElevator { from_floor: u8, call: Call },
    SelectFloor { elevator_id: usize, target_floor: u8 },
    Snapshot(Sender<Vec<Elevator>>),
    Config(Sender<Config>),
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct FleetHandle {
    command_tx: Sender<Command>,
}

impl FleetHandle {
    fn send(&self, command: Command) -> Result<(), ServiceError> {
        self.command_tx.send(command).map_err(|_| ServiceError::Disconnected)
    }

    pub fn configure(&self, config: Config) -> Result<(), ServiceError> {
        self.send(Command::Configure(config))
    }

    pub fn call_elevator(&self, from_floor: u8, call: Call) -> Result<(), ServiceError> {
        self.send(Command::CallElevator { from_floor, call })
    }

    pub fn select_floor(&self, elevator_id: usize, target_floor: u8) -> Result<(), ServiceError> {
        self.send(Command::SelectFloor { elevator_id, target_floor })
    }

    pub fn snapshot(&self) -> Result<Vec<Elevator>, ServiceError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(Command::Snapshot(reply_tx))?;
        reply_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    pub fn config(&self) -> Result<Config, ServiceError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(Command::Config(reply_tx))?;
        reply_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    pub fn shutdown(&self) -> Result<(), ServiceError> {
        self.send(Command::Shutdown)
    }
}

/// Starts the owner thread. Every state change is followed by a snapshot on
/// `snapshot_tx`, if one is given.
pub fn spawn(
    config: Config,
    snapshot_tx: Option<Sender<Vec<Elevator>>>,
) -> io::Result<(FleetHandle, JoinHandle<()>)> {
    let (command_tx, command_rx) = unbounded();
    let handle = thread::Builder::new()
        .name("fleet".to_string())
        .spawn(move || main(Fleet::new(config), command_rx, snapshot_tx))?;
    Ok((FleetHandle { command_tx }, handle))
}

fn main(
    mut fleet: Fleet,
    command_rx: Receiver<Command>,
    snapshot_tx: Option<Sender<Vec<Elevator>>>,
) {
    let mut timer = tick(fleet.config().tick_period());
    info!(period = ?fleet.config().tick_period(), "fleet service started");

    loop {
        select! {
            recv(command_rx) -> msg => {
                let command = match msg {
                    Ok(command) => command,
                    // every handle is gone
                    Err(_) => break,
                };
                match command {
                    Command::Configure(config) => {
                        let period = fleet.config().tick_period();
                        if fleet.configure(config) == Reconfiguration::Unchanged {
                            continue;
                        }
                        // restart from a full period, no partial tick carries over
                        if fleet.config().tick_period() != period {
                            timer = tick(fleet.config().tick_period());
                        }
                    },
                    Command::CallElevator { from_floor, call } => fleet.call_elevator(from_floor, call),
                    Command::SelectFloor { elevator_id, target_floor } => fleet.select_floor(elevator_id, target_floor),
                    Command::Snapshot(reply_tx) => {
                        let _ = reply_tx.send(fleet.snapshot());
                        continue;
                    },
                    Command::Config(reply_tx) => {
                        let _ = reply_tx.send(fleet.config());
                        continue;
                    },
                    Command::Shutdown => break,
                }
            },
            recv(timer) -> _ => {
                fleet.tick();
            },
        }
        if let Some(snapshot_tx) = &snapshot_tx {
            if snapshot_tx.send(fleet.snapshot()).is_err() {
                debug!("snapshot subscriber disconnected");
            }
        }
    }
    info!("fleet service stopped");
}

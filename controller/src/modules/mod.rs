use std::io::{self, Result};
use std::thread;

use crossbeam_channel::unbounded;
use tracing::info;

use fleet::service;

use crate::utilities::args;

mod debug;
mod input;

pub fn run() -> Result<()> {
    // READ CONFIGURATION
    let args = args::parse_env_args();
    let config = args.apply(args::read_config());
    info!(
        floors = config.total_floors,
        elevators = config.total_elevators,
        travel_time = config.floor_travel_time,
        "starting controller"
    );

    // INITIALIZE FLEET SERVICE
    let (snapshot_tx, snapshot_rx) = unbounded();
    let (handle, fleet_thread) = service::spawn(config, args.display.then_some(snapshot_tx))?;

    // INITIALIZE THREAD FOR STATUS DISPLAY
    if args.display {
        thread::Builder::new().name("debug".to_string()).spawn(move || debug::main(snapshot_rx))?;
    }

    // INITIALIZE THREAD FOR OPERATOR INPUT
    let (quit_tx, quit_rx) = unbounded();
    {
        let handle = handle.clone();
        thread::Builder::new().name("input".to_string()).spawn(move || input::main(handle, quit_tx))?;
    }

    let _ = quit_rx.recv();
    println!("STOPPING PROGRAM...");
    let _ = handle.shutdown();
    fleet_thread
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "fleet thread panicked"))
}

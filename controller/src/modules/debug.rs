/// ----- DEBUG MODULE -----
/// Repaints a status table of the whole fleet in place every time the fleet
/// service publishes a new snapshot. Read-only, it never talks back.

use std::io::{self, stdout, Stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::{cursor, terminal, ExecutableCommand};
use tracing::warn;

use fleet::Elevator;

const HEADER_SIZE: u16 = 5;

pub struct Debug {
    stdout: Stdout,
    lines_printed: u16,
}

fn format_floor(floor: Option<u8>) -> String {
    match floor {
        Some(floor) => floor.to_string(),
        None => String::from("-"),
    }
}

fn format_queue(queue: &[u8]) -> String {
    let floors: Vec<String> = queue.iter().map(|floor| floor.to_string()).collect();
    format!("[{}]", floors.join(","))
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            lines_printed: 0,
        }
    }

    pub fn printstatus(&mut self, elevators: &[Elevator]) -> io::Result<()> {
        if self.lines_printed > 0 {
            self.stdout.execute(cursor::MoveUp(self.lines_printed))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+------------------------------------------------------------------------------+")?;
        writeln!(self.stdout, "| ELEVATORS                                                                    |")?;
        writeln!(self.stdout, "+------+------------+------------+-------------+------------------+------------+")?;
        writeln!(self.stdout, "| {0:<4} | {1:<10} | {2:<10} | {3:<11} | {4:<16} | {5:<10} |", "ID", "FLOOR", "DIRECTION", "DESTINATION", "QUEUE", "TRAVELLED")?;
        writeln!(self.stdout, "+------+------------+------------+-------------+------------------+------------+")?;
        for elevator in elevators {
            writeln!(self.stdout, "| {0:<4} | {1:<10} | {2:<10} | {3:<11} | {4:<16} | {5:<10} |",
                elevator.id,
                elevator.current_floor,
                elevator.direction.as_string(),
                format_floor(elevator.destination_floor),
                format_queue(&elevator.queue),
                elevator.floors_traversed)?;
        }
        writeln!(self.stdout, "+------+------------+------------+-------------+------------------+------------+")?;
        self.stdout.flush()?;

        self.lines_printed = HEADER_SIZE + elevators.len() as u16 + 1;
        Ok(())
    }
}

pub fn main(snapshot_rx: Receiver<Vec<Elevator>>) {
    let mut debug = Debug::new();
    while let Ok(mut snapshot) = snapshot_rx.recv() {
        // only the newest snapshot is worth drawing
        if let Some(latest) = snapshot_rx.try_iter().last() {
            snapshot = latest;
        }
        if let Err(e) = debug.printstatus(&snapshot) {
            warn!(error = %e, "could not draw status table");
            return;
        }
    }
}

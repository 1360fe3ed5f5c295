/// ----- INPUT MODULE -----
/// This module reads operator commands from stdin, one per line, and
/// forwards them to the fleet service. It stands in for the hall call
/// buttons and the cab panels.

use std::io::{self, BufRead};

use crossbeam_channel::Sender;
use thiserror::Error;
use tracing::{debug, error, warn};

use fleet::{Call, Config, FleetHandle, ServiceError};

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Call { floor: i64, call: Call },
    Select { elevator: i64, floor: i64 },
    Floors(i64),
    Elevators(i64),
    Travel(f64),
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' is missing an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0}")]
    BadDirection(String),
}

fn number<T: std::str::FromStr>(word: Option<&str>, command: &'static str) -> Result<T, InputError> {
    let word = word.ok_or(InputError::MissingArgument(command))?;
    word.parse::<T>().map_err(|_| InputError::NotANumber(word.to_string()))
}

pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    match command.as_str() {
        "call" => {
            let floor = number(words.next(), "call")?;
            let call = words
                .next()
                .ok_or(InputError::MissingArgument("call"))?
                .parse::<Call>()
                .map_err(InputError::BadDirection)?;
            Ok(Input::Call { floor, call })
        },
        "select" => Ok(Input::Select {
            elevator: number(words.next(), "select")?,
            floor: number(words.next(), "select")?,
        }),
        "floors" => Ok(Input::Floors(number(words.next(), "floors")?)),
        "elevators" => Ok(Input::Elevators(number(words.next(), "elevators")?)),
        "travel" => Ok(Input::Travel(number(words.next(), "travel")?)),
        "status" => Ok(Input::Status),
        "quit" | "exit" => Ok(Input::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn reconfigure(handle: &FleetHandle, change: impl FnOnce(Config) -> Config) -> Result<(), ServiceError> {
    let config = handle.config()?;
    handle.configure(change(config))
}

pub fn apply(handle: &FleetHandle, input: Input) -> Result<(), ServiceError> {
    match input {
        Input::Call { floor, call } => match u8::try_from(floor) {
            Ok(floor) => handle.call_elevator(floor, call),
            Err(_) => {
                debug!(floor, "dropping hall call for nonexistent floor");
                Ok(())
            },
        },
        Input::Select { elevator, floor } => match (usize::try_from(elevator), u8::try_from(floor)) {
            (Ok(elevator), Ok(floor)) => handle.select_floor(elevator, floor),
            _ => {
                debug!(elevator, floor, "dropping selection outside the fleet");
                Ok(())
            },
        },
        Input::Floors(total_floors) => reconfigure(handle, |config| {
            Config::clamped(total_floors, config.total_elevators.into(), config.floor_travel_time)
        }),
        Input::Elevators(total_elevators) => reconfigure(handle, |config| {
            Config::clamped(config.total_floors.into(), total_elevators, config.floor_travel_time)
        }),
        Input::Travel(floor_travel_time) => reconfigure(handle, |config| Config { floor_travel_time, ..config }),
        Input::Status => {
            let snapshot = handle.snapshot()?;
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!(error = %e, "could not serialize snapshot"),
            }
            Ok(())
        },
        Input::Quit => Ok(()),
    }
}

pub fn main(handle: FleetHandle, quit_tx: Sender<()>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "could not read from stdin");
                break;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(input) => {
                if let Err(e) = apply(&handle, input) {
                    error!(error = %e, "dropping command");
                    break;
                }
            },
            Err(e) => warn!("{}, skipping...", e),
        }
    }
    let _ = quit_tx.send(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hall_call() {
        assert_eq!(parse_line("call 3 up"), Ok(Input::Call { floor: 3, call: Call::HallUp }));
        assert_eq!(parse_line("  CALL 0 down "), Ok(Input::Call { floor: 0, call: Call::HallDown }));
    }

    #[test]
    fn parses_cab_selection_and_settings() {
        assert_eq!(parse_line("select 2 7"), Ok(Input::Select { elevator: 2, floor: 7 }));
        assert_eq!(parse_line("floors 8"), Ok(Input::Floors(8)));
        assert_eq!(parse_line("elevators 3"), Ok(Input::Elevators(3)));
        assert_eq!(parse_line("travel 1.5"), Ok(Input::Travel(1.5)));
        assert_eq!(parse_line("status"), Ok(Input::Status));
        assert_eq!(parse_line("quit"), Ok(Input::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("call"), Err(InputError::MissingArgument("call")));
        assert_eq!(parse_line("call x up"), Err(InputError::NotANumber("x".to_string())));
        assert!(matches!(parse_line("call 2 left"), Err(InputError::BadDirection(_))));
        assert_eq!(parse_line("select 1"), Err(InputError::MissingArgument("select")));
        assert_eq!(parse_line("jump"), Err(InputError::UnknownCommand("jump".to_string())));
    }

    #[test]
    fn wide_numbers_parse() {
        assert_eq!(parse_line("floors 300"), Ok(Input::Floors(300)));
        assert_eq!(parse_line("elevators -2"), Ok(Input::Elevators(-2)));
        assert_eq!(parse_line("call 300 up"), Ok(Input::Call { floor: 300, call: Call::HallUp }));
        assert_eq!(parse_line("select -1 -2"), Ok(Input::Select { elevator: -1, floor: -2 }));
    }

    #[test]
    fn wide_settings_are_clamped() {
        let (handle, thread) = fleet::service::spawn(Config::new(6, 2, 60.0), None).unwrap();
        apply(&handle, parse_line("floors 300").unwrap()).unwrap();
        apply(&handle, parse_line("elevators -2").unwrap()).unwrap();
        assert_eq!(handle.config().unwrap(), Config::new(10, 1, 60.0));

        apply(&handle, parse_line("floors -2").unwrap()).unwrap();
        apply(&handle, parse_line("elevators 300").unwrap()).unwrap();
        assert_eq!(handle.config().unwrap(), Config::new(2, 10, 60.0));
        handle.shutdown().unwrap();
        thread.join().unwrap();
    }

    #[test]
    fn nonexistent_floors_and_elevators_change_nothing() {
        let (handle, thread) = fleet::service::spawn(Config::new(6, 2, 60.0), None).unwrap();
        let before = handle.snapshot().unwrap();
        for line in ["call 300 up", "call -2 down", "select 0 300", "select -1 2", "select 9 2"] {
            apply(&handle, parse_line(line).unwrap()).unwrap();
        }
        assert_eq!(handle.snapshot().unwrap(), before);
        handle.shutdown().unwrap();
        thread.join().unwrap();
    }

    #[test]
    fn setting_commands_keep_other_fields() {
        let (handle, thread) = fleet::service::spawn(Config::new(6, 2, 60.0), None).unwrap();
        apply(&handle, Input::Floors(9)).unwrap();
        apply(&handle, Input::Travel(3.0)).unwrap();
        assert_eq!(handle.config().unwrap(), Config::new(9, 2, 3.0));
        handle.shutdown().unwrap();
        thread.join().unwrap();
    }
}

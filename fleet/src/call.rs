use std::str::FromStr;

use crate::direction::Direction;

/// A hall call button. Passengers waiting on a floor press one of these.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
}

impl Call {
    pub fn direction(self) -> Direction {
        match self {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
        }
    }
}

impl FromStr for Call {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Call::HallUp),
            "down" | "d" => Ok(Call::HallDown),
            other => Err(format!("unknown call direction '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_buttons() {
        assert_eq!("up".parse::<Call>(), Ok(Call::HallUp));
        assert_eq!("DOWN".parse::<Call>(), Ok(Call::HallDown));
        assert!("sideways".parse::<Call>().is_err());
    }

    #[test]
    fn buttons_map_to_travel_direction() {
        assert_eq!(Call::HallUp.direction(), Direction::Up);
        assert_eq!(Call::HallDown.direction(), Direction::Down);
    }
}

use std::cmp::Ordering;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Down,
    Idle,
    Up,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`. Anything that is not strictly
    /// above counts as down, which is also what an elevator asked to go to its own floor gets.
    pub fn towards(from: u8, to: u8) -> Self {
        if to > from { Direction::Up } else { Direction::Down }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Idle => String::from("idle"),
            Direction::Up => String::from("up"),
        }
    }

    /// Ordering a queue should follow while travelling in this direction.
    pub fn queue_order(self, a: &u8, b: &u8) -> Ordering {
        match self {
            Direction::Up => a.cmp(b),
            Direction::Down => b.cmp(a),
            Direction::Idle => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn towards_same_floor_is_down() {
        assert_eq!(Direction::towards(3, 3), Direction::Down);
        assert_eq!(Direction::towards(3, 4), Direction::Up);
        assert_eq!(Direction::towards(3, 0), Direction::Down);
    }

    #[test]
    fn queue_order_follows_travel() {
        let mut queue = vec![4, 1, 3];
        queue.sort_by(|a, b| Direction::Up.queue_order(a, b));
        assert_eq!(queue, vec![1, 3, 4]);
        queue.sort_by(|a, b| Direction::Down.queue_order(a, b));
        assert_eq!(queue, vec![4, 3, 1]);
    }
}

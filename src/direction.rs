use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{NEXT_SELECTOR, PREV_SELECTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}', expected 'prev' or 'next'")]
pub struct ParseDirectionError(String);

impl Direction {
    /// Index reached from `current` in a cycle of `len` slides, `None` when there are none.
    pub fn step(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = current % len;
        Some(match self {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        })
    }

    /// Maps the default control selectors onto a direction.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            PREV_SELECTOR => Some(Direction::Previous),
            NEXT_SELECTOR => Some(Direction::Next),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => write!(f, "previous"),
            Direction::Next => write!(f, "next"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prev" | "previous" => Ok(Direction::Previous),
            "next" => Ok(Direction::Next),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(Direction::Next.step(0, 3), Some(1));
        assert_eq!(Direction::Next.step(2, 3), Some(0));
        assert_eq!(Direction::Previous.step(0, 3), Some(2));
        assert_eq!(Direction::Previous.step(1, 3), Some(0));
        assert_eq!(Direction::Next.step(0, 1), Some(0));
        assert_eq!(Direction::Previous.step(0, 1), Some(0));
    }

    #[test]
    fn step_on_empty_cycle_is_none() {
        assert_eq!(Direction::Next.step(0, 0), None);
        assert_eq!(Direction::Previous.step(5, 0), None);
    }

    #[test]
    fn parses_names_and_selectors() {
        assert_eq!("prev".parse::<Direction>(), Ok(Direction::Previous));
        assert_eq!("Previous".parse::<Direction>(), Ok(Direction::Previous));
        assert_eq!("NEXT".parse::<Direction>(), Ok(Direction::Next));
        assert!("up".parse::<Direction>().is_err());

        assert_eq!(Direction::from_selector(".prev"), Some(Direction::Previous));
        assert_eq!(Direction::from_selector(".next"), Some(Direction::Next));
        assert_eq!(Direction::from_selector(".fade"), None);
        assert_eq!(Direction::Previous.to_string(), "previous");
    }
}

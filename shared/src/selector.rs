use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::goals::GOAL_COUNT;

/// Composite artwork that is not tied to a single numbered goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Grid showing every goal
    All,
    /// The circular SDG wheel
    Circle,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::All => "all",
            Symbol::Circle => "circle",
        }
    }

    /// Alt text for the symbolic artwork
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::All => "All Sustainable Development Goals",
            Symbol::Circle => "Sustainable Development Goals Circle",
        }
    }
}

/// A goal selector that resolved to something displayable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    Symbolic(Symbol),
    /// Goal number, always within 1..=17
    Numeric(u8),
}

impl Selector {
    /// Asset key for this selector: "all", "circle" or the goal number
    pub fn asset_key(&self) -> String {
        match self {
            Selector::Symbolic(symbol) => symbol.as_str().to_string(),
            Selector::Numeric(goal) => goal.to_string(),
        }
    }

    pub fn goal_number(&self) -> Option<u8> {
        match self {
            Selector::Numeric(goal) => Some(*goal),
            Selector::Symbolic(_) => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asset_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Goal selector {0:?} is not a number, \"all\" or \"circle\"")]
    NotANumber(String),
    #[error("Goal {0} is outside 1..=17")]
    OutOfRange(i64),
}

impl FromStr for Selector {
    type Err = SelectorError;

    /// Symbolic tokens must match exactly; anything else is read as a
    /// leading integer ("12abc" is goal 12, " 5" is goal 5).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => return Ok(Selector::Symbolic(Symbol::All)),
            "circle" => return Ok(Selector::Symbolic(Symbol::Circle)),
            _ => {}
        }

        let value = parse_leading_int(s).ok_or_else(|| SelectorError::NotANumber(s.to_string()))?;
        if (1..=i64::from(GOAL_COUNT)).contains(&value) {
            Ok(Selector::Numeric(value as u8))
        } else {
            Err(SelectorError::OutOfRange(value))
        }
    }
}

/// Read an optionally signed run of ASCII digits after leading whitespace.
/// Values too large for i64 saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -magnitude } else { magnitude })
}

// crates/dial-core/src/command.rs
//
// Rotation commands and their text form: one command per line, a direction
// letter followed by a decimal distance ("L68", "R1000").

use std::fmt;
use std::str::FromStr;

use crate::error::{DialError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower numbers; wraps from 0 to 99.
    Left,
    /// Toward higher numbers; wraps from 99 to 0.
    Right,
}

impl Direction {
    pub fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u32,
}

impl Rotation {
    pub const fn left(distance: u32) -> Rotation {
        Rotation {
            direction: Direction::Left,
            distance,
        }
    }

    pub const fn right(distance: u32) -> Rotation {
        Rotation {
            direction: Direction::Right,
            distance,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.letter(), self.distance)
    }
}

impl FromStr for Rotation {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rotation(s).map_err(DialError::Command)
    }
}

fn parse_rotation(s: &str) -> std::result::Result<Rotation, String> {
    let s = s.trim();
    let mut chars = s.chars();
    let direction = match chars.next() {
        Some('L') | Some('l') => Direction::Left,
        Some('R') | Some('r') => Direction::Right,
        Some(c) => return Err(format!("expected L or R, got {c:?}")),
        None => return Err("empty command".into()),
    };

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(format!("missing distance in {s:?}"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("distance is not a decimal number: {digits:?}"));
    }
    let distance = digits
        .parse::<u32>()
        .map_err(|_| format!("distance does not fit in 32 bits: {digits}"))?;

    Ok(Rotation {
        direction,
        distance,
    })
}

/// Parse a command document. Blank lines and `#` comments are skipped.
pub fn parse_commands(text: &str) -> Result<Vec<Rotation>> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(cut) => &raw[..cut],
            None => raw,
        };
        if line.trim().is_empty() {
            continue;
        }
        let rot = parse_rotation(line).map_err(|msg| DialError::Parse { line: idx + 1, msg })?;
        out.push(rot);
    }
    Ok(out)
}

/// Render commands back to the line format, newline-terminated.
pub fn format_commands(rots: &[Rotation]) -> String {
    let mut s = String::with_capacity(rots.len() * 6);
    for r in rots {
        s.push_str(&r.to_string());
        s.push('\n');
    }
    s
}

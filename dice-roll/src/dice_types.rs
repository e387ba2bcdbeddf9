/*
Copyright 2021 Robin Marchart

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU32;

/// A single die. Only the polyhedral sizes used for character generation exist.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl Die {
    pub const ALL: [Die; 7] = [
        Die::D4,
        Die::D6,
        Die::D8,
        Die::D10,
        Die::D12,
        Die::D20,
        Die::D100,
    ];

    /// Returns `None` for any face count outside of 4, 6, 8, 10, 12, 20 and 100.
    pub fn new(sides: u32) -> Option<Die> {
        match sides {
            4 => Some(Die::D4),
            6 => Some(Die::D6),
            8 => Some(Die::D8),
            10 => Some(Die::D10),
            12 => Some(Die::D12),
            20 => Some(Die::D20),
            100 => Some(Die::D100),
            _ => None,
        }
    }

    pub fn sides(self) -> u32 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
            Die::D100 => 100,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("a d{0} is not a supported die")]
pub struct InvalidSides(pub u32);

impl TryFrom<u32> for Die {
    type Error = InvalidSides;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        Die::new(sides).ok_or(InvalidSides(sides))
    }
}

/// Which single result gets discarded from a [Dice::Dropping] roll.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Dropping {
    High,
    Low,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
}

/// A dice expression as built by the notation parser.
///
/// Compound nodes own both operands, so every value is a finite tree.
/// Parsed chains nest to the right: `2d4+3d12-4` is `2d4 + (3d12 - 4)`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Dice {
    Simple(Die, NonZeroU32),
    Dropping(Die, NonZeroU32, Dropping),
    Modifier(i64),
    Compound(Box<Dice>, Operation, Box<Dice>),
}

impl Dice {
    pub fn simple(die: Die, times: u32) -> Option<Dice> {
        NonZeroU32::new(times).map(|times| Dice::Simple(die, times))
    }

    pub fn dropping(die: Die, times: u32, dropping: Dropping) -> Option<Dice> {
        NonZeroU32::new(times).map(|times| Dice::Dropping(die, times, dropping))
    }

    pub fn modifier(value: i64) -> Dice {
        Dice::Modifier(value)
    }

    pub fn compound(lhs: Dice, operation: Operation, rhs: Dice) -> Dice {
        Dice::Compound(Box::new(lhs), operation, Box::new(rhs))
    }

    /// How many dice a single roll draws, dropped ones included.
    pub fn draws(&self) -> u64 {
        match self {
            Dice::Simple(_, times) | Dice::Dropping(_, times, _) => u64::from(times.get()),
            Dice::Modifier(_) => 0,
            Dice::Compound(lhs, _, rhs) => lhs.draws().saturating_add(rhs.draws()),
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl fmt::Display for Dropping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dropping::High => f.write_str("-H"),
            Dropping::Low => f.write_str("-L"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => f.write_str("+"),
            Operation::Sub => f.write_str("-"),
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dice::Simple(die, times) => write!(f, "{}{}", times, die),
            Dice::Dropping(die, times, dropping) => write!(f, "{}{}{}", times, die, dropping),
            Dice::Modifier(value) => write!(f, "{}", value),
            Dice::Compound(lhs, operation, rhs) => write!(f, "{}{}{}", lhs, operation, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_new() {
        for sides in [4, 6, 8, 10, 12, 20, 100].iter() {
            assert_eq!(Die::new(*sides).map(Die::sides), Some(*sides));
        }
        assert_eq!(Die::new(0), None);
        assert_eq!(Die::new(2), None);
        assert_eq!(Die::new(7), None);
        assert_eq!(Die::new(1000), None);
    }

    #[test]
    fn test_die_try_from() {
        assert_eq!(Die::try_from(20), Ok(Die::D20));
        assert_eq!(Die::try_from(3), Err(InvalidSides(3)));
        assert_eq!(InvalidSides(3).to_string(), "a d3 is not a supported die");
    }

    #[test]
    fn test_all_is_sorted_by_sides() {
        let sides: Vec<u32> = Die::ALL.iter().map(|d| d.sides()).collect();
        assert_eq!(sides, vec![4, 6, 8, 10, 12, 20, 100]);
    }

    #[test]
    fn test_zero_times_is_rejected() {
        assert_eq!(Dice::simple(Die::D6, 0), None);
        assert_eq!(Dice::dropping(Die::D6, 0, Dropping::Low), None);
        assert!(Dice::simple(Die::D6, 1).is_some());
    }

    #[test]
    fn test_draws() {
        assert_eq!(Dice::modifier(7).draws(), 0);
        assert_eq!(Dice::dropping(Die::D6, 4, Dropping::Low).unwrap().draws(), 4);
        let dice = Dice::compound(
            Dice::simple(Die::D4, u32::MAX).unwrap(),
            Operation::Add,
            Dice::simple(Die::D8, 3).unwrap(),
        );
        assert_eq!(dice.draws(), u64::from(u32::MAX) + 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Die::D100.to_string(), "d100");
        assert_eq!(Dice::simple(Die::D6, 2).unwrap().to_string(), "2d6");
        assert_eq!(
            Dice::dropping(Die::D6, 4, Dropping::Low).unwrap().to_string(),
            "4d6-L"
        );
        assert_eq!(
            Dice::dropping(Die::D20, 2, Dropping::High).unwrap().to_string(),
            "2d20-H"
        );
        assert_eq!(Dice::modifier(-3).to_string(), "-3");
        assert_eq!(
            Dice::compound(
                Dice::simple(Die::D4, 2).unwrap(),
                Operation::Add,
                Dice::compound(
                    Dice::simple(Die::D12, 3).unwrap(),
                    Operation::Sub,
                    Dice::modifier(4)
                )
            )
            .to_string(),
            "2d4+3d12-4"
        );
    }
}

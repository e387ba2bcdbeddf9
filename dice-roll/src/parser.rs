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

//! Parser for compound dice notation such as `2d6+3`, `4d6-L` or `2d4+3d12-4`.
//!
//! Tokens are recognised with nom. The notation itself is resolved by splitting the
//! string around the first `d` and the first operator after it, then parsing the
//! remainder recursively, so chains nest to the right.

use crate::dice_types::{Dice, Die, Dropping, Operation};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{all_consuming, map_opt, map_res, value},
    IResult,
};
use std::num::NonZeroU32;
use std::str::FromStr;

#[cfg(feature = "logging")]
use log::debug;

pub fn parse_times(input: &str) -> IResult<&str, NonZeroU32> {
    map_opt(digit1, |s: &str| {
        s.parse::<u32>().ok().and_then(NonZeroU32::new)
    })(input)
}

pub fn parse_integer(input: &str) -> IResult<&str, i64> {
    map_res(digit1, |s: &str| s.parse::<i64>())(input)
}

pub fn parse_die(input: &str) -> IResult<&str, Die> {
    alt((
        value(Die::D100, tag("100")),
        value(Die::D10, tag("10")),
        value(Die::D12, tag("12")),
        value(Die::D20, tag("20")),
        value(Die::D4, tag("4")),
        value(Die::D6, tag("6")),
        value(Die::D8, tag("8")),
        value(Die::D100, tag("%")),
    ))(input)
}

pub fn parse_dropping(input: &str) -> IResult<&str, Dropping> {
    alt((
        value(Dropping::Low, tag("-L")),
        value(Dropping::High, tag("-H")),
    ))(input)
}

pub fn parse_operation(input: &str) -> IResult<&str, Operation> {
    alt((
        value(Operation::Add, tag("+")),
        value(Operation::Sub, tag("-")),
    ))(input)
}

/// Runs `parser` on all of `input`; any leftover input is a failure.
fn whole<'a, O, F>(parser: F, input: &'a str) -> Option<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(input).ok().map(|(_, output)| output)
}

fn is_operator(c: char) -> bool {
    c == '+' || c == '-'
}

/// Splits a trailing `-L`/`-H` off `input`.
fn split_dropping(input: &str) -> Option<(&str, Dropping)> {
    let at = input.len().checked_sub(2)?;
    let dropping = whole(parse_dropping, input.get(at..)?)?;
    Some((&input[..at], dropping))
}

/// Splits `input` at its first operator, but only if everything after it is an
/// expression on its own.
fn split_operand(input: &str) -> Option<(&str, Operation, Dice)> {
    let at = input.find(is_operator)?;
    let operation = whole(parse_operation, &input[at..at + 1])?;
    let operand = parse_expression(&input[at + 1..])?;
    Some((&input[..at], operation, operand))
}

fn parse_expression(input: &str) -> Option<Dice> {
    let at = match input.find('d') {
        Some(at) => at,
        None => return parse_modifier_expression(input),
    };
    let times = match &input[..at] {
        "" => NonZeroU32::new(1)?,
        times => whole(parse_times, times)?,
    };
    let rest = &input[at + 1..];

    // "-L" and "-H" win over subtraction
    if let Some((sides, dropping)) = split_dropping(rest) {
        let die = whole(parse_die, sides)?;
        return Some(Dice::Dropping(die, times, dropping));
    }

    match split_operand(rest) {
        Some((sides, operation, operand)) => {
            let die = whole(parse_die, sides)?;
            Some(Dice::compound(Dice::Simple(die, times), operation, operand))
        }
        None => Some(Dice::Simple(whole(parse_die, rest)?, times)),
    }
}

fn parse_modifier_expression(input: &str) -> Option<Dice> {
    if let Some(modifier) = whole(parse_integer, input) {
        return Some(Dice::Modifier(modifier));
    }
    let at = input.find(is_operator)?;
    let modifier = whole(parse_integer, &input[..at])?;
    let (_, operation, operand) = split_operand(&input[at..])?;
    Some(Dice::compound(Dice::Modifier(modifier), operation, operand))
}

/// Parses dice notation.
///
/// Returns `None` unless the whole string is valid notation. Case matters: the `d`
/// is lowercase and the drop markers `-L` and `-H` are uppercase. Surrounding
/// whitespace is not accepted.
pub fn parse(notation: &str) -> Option<Dice> {
    let result = parse_expression(notation);
    #[cfg(feature = "logging")]
    {
        if result.is_none() {
            debug!("rejected dice notation {:?}", notation)
        }
    }
    result
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("invalid dice notation")]
pub struct ParseDiceError;

impl FromStr for Dice {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or(ParseDiceError)
    }
}

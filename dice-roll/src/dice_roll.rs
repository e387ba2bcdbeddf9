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

use crate::dice_types::*;
use crate::random::RandomIndexGenerator;

#[cfg(feature = "logging")]
use log::debug;

pub trait DiceEvaluate {
    /// Rolls and returns the total together with every single die result in the
    /// order it was drawn. Dropped results are part of that list.
    ///
    /// The list holds one entry per drawn die, use [DiceEvaluate::roll] when only
    /// the total is needed.
    fn evaluate<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> (i64, Vec<i64>);

    /// Rolls and returns only the total. Draws the same values in the same order
    /// as [DiceEvaluate::evaluate] but keeps nothing but running sums.
    fn roll<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> i64 {
        self.evaluate(generator).0
    }
}

fn draw<G: RandomIndexGenerator + ?Sized>(die: Die, generator: &mut G) -> i64 {
    generator.next_index(die.sides() as usize) as i64 + 1
}

fn draw_many<G: RandomIndexGenerator + ?Sized>(die: Die, times: u32, generator: &mut G) -> Vec<i64> {
    (0..times).map(|_| draw(die, generator)).collect()
}

fn combine(left: i64, operation: Operation, right: i64) -> i64 {
    match operation {
        Operation::Add => left.saturating_add(right),
        Operation::Sub => left.saturating_sub(right),
    }
}

impl DiceEvaluate for Die {
    fn evaluate<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> (i64, Vec<i64>) {
        let result = draw(*self, generator);
        (result, vec![result])
    }

    fn roll<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> i64 {
        draw(*self, generator)
    }
}

impl DiceEvaluate for Dice {
    fn evaluate<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> (i64, Vec<i64>) {
        let result: (i64, Vec<i64>) = match self {
            Dice::Simple(die, times) => {
                let rolls = draw_many(*die, times.get(), generator);
                (rolls.iter().sum(), rolls)
            }
            Dice::Dropping(die, times, dropping) => {
                let rolls = draw_many(*die, times.get(), generator);
                let mut kept = rolls.clone();
                kept.sort_unstable();
                let kept = match dropping {
                    Dropping::Low => &kept[1..],
                    Dropping::High => &kept[..kept.len() - 1],
                };
                (kept.iter().sum(), rolls)
            }
            Dice::Modifier(value) => (*value, Vec::new()),
            Dice::Compound(lhs, operation, rhs) => {
                let (left, mut rolls) = lhs.evaluate(generator);
                let (right, right_rolls) = rhs.evaluate(generator);
                rolls.extend(right_rolls);
                (combine(left, *operation, right), rolls)
            }
        };
        #[cfg(feature = "logging")]
        {
            debug!("got {:?} for dice {}", &result, &self)
        }
        result
    }

    fn roll<G: RandomIndexGenerator + ?Sized>(&self, generator: &mut G) -> i64 {
        let total: i64 = match self {
            Dice::Simple(die, times) => (0..times.get()).map(|_| draw(*die, generator)).sum(),
            Dice::Dropping(die, times, dropping) => {
                let (mut sum, mut lowest, mut highest) = (0, i64::MAX, i64::MIN);
                for _ in 0..times.get() {
                    let result = draw(*die, generator);
                    sum += result;
                    lowest = lowest.min(result);
                    highest = highest.max(result);
                }
                match dropping {
                    Dropping::Low => sum - lowest,
                    Dropping::High => sum - highest,
                }
            }
            Dice::Modifier(value) => *value,
            Dice::Compound(lhs, operation, rhs) => {
                let left = lhs.roll(generator);
                combine(left, *operation, rhs.roll(generator))
            }
        };
        #[cfg(feature = "logging")]
        {
            debug!("rolled {} for dice {}", total, &self)
        }
        total
    }
}

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

/// Smallest and largest total a roll can produce.
pub trait DiceLimits {
    fn min(&self) -> i64;
    fn max(&self) -> i64;
}

impl DiceLimits for Die {
    fn min(&self) -> i64 {
        1
    }

    fn max(&self) -> i64 {
        self.sides().into()
    }
}

impl DiceLimits for Dice {
    fn min(&self) -> i64 {
        match self {
            Dice::Simple(die, times) => i64::from(times.get()) * die.min(),
            Dice::Dropping(die, times, _) => i64::from(times.get() - 1) * die.min(),
            Dice::Modifier(value) => *value,
            Dice::Compound(lhs, Operation::Add, rhs) => lhs.min().saturating_add(rhs.min()),
            Dice::Compound(lhs, Operation::Sub, rhs) => lhs.min().saturating_sub(rhs.max()),
        }
    }

    fn max(&self) -> i64 {
        match self {
            Dice::Simple(die, times) => i64::from(times.get()) * die.max(),
            Dice::Dropping(die, times, _) => i64::from(times.get() - 1) * die.max(),
            Dice::Modifier(value) => *value,
            Dice::Compound(lhs, Operation::Add, rhs) => lhs.max().saturating_add(rhs.max()),
            Dice::Compound(lhs, Operation::Sub, rhs) => lhs.max().saturating_sub(rhs.min()),
        }
    }
}

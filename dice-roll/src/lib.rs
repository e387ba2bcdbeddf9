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

//! Dice notation for character generation.
//!
//! ```
//! use chargen_dice::{dice_roll::DiceEvaluate, parser::parse, random::SequenceIndexGenerator};
//!
//! let stats = parse("4d6-L").unwrap();
//! assert_eq!(stats.roll(&mut SequenceIndexGenerator::new()), 9);
//! assert_eq!(parse("2d7"), None);
//! ```

pub mod dice_roll;
pub mod dice_types;
pub mod limits;
#[cfg(feature = "parser")]
pub mod parser;
pub mod random;

pub use dice_roll::DiceEvaluate;
pub use dice_types::{Dice, Die, Dropping, InvalidSides, Operation};
pub use limits::DiceLimits;
#[cfg(feature = "parser")]
pub use parser::{parse, ParseDiceError};
#[cfg(feature = "roll")]
pub use random::{EntropyIndexGenerator, RngIndexGenerator};
pub use random::{RandomIndexGenerator, SequenceIndexGenerator};

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

#[cfg(feature = "roll")]
use rand::Rng;

/// Source of bounded random indices.
///
/// This is the only source of randomness used when rolling dice. Callers pick the
/// implementation: [EntropyIndexGenerator] for real rolls, [SequenceIndexGenerator]
/// for reproducible ones.
pub trait RandomIndexGenerator {
    /// Returns an index in `0..upper_bound`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `upper_bound` is zero.
    fn next_index(&mut self, upper_bound: usize) -> usize;

    /// Picks one element of `items`, or `None` if there are none.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.next_index(items.len()))
        }
    }
}

impl<G: RandomIndexGenerator + ?Sized> RandomIndexGenerator for &mut G {
    fn next_index(&mut self, upper_bound: usize) -> usize {
        (**self).next_index(upper_bound)
    }
}

/// Draws every index from the thread local entropy seeded generator.
#[cfg(feature = "roll")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyIndexGenerator;

#[cfg(feature = "roll")]
impl RandomIndexGenerator for EntropyIndexGenerator {
    fn next_index(&mut self, upper_bound: usize) -> usize {
        rand::thread_rng().gen_range(0..upper_bound)
    }
}

/// Adapts any [rand::Rng], e.g. a seeded one.
#[cfg(feature = "roll")]
#[derive(Debug, Clone)]
pub struct RngIndexGenerator<R: Rng> {
    rng: R,
}

#[cfg(feature = "roll")]
impl<R: Rng> RngIndexGenerator<R> {
    pub fn new(rng: R) -> Self {
        RngIndexGenerator { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "roll")]
impl<R: Rng> RandomIndexGenerator for RngIndexGenerator<R> {
    fn next_index(&mut self, upper_bound: usize) -> usize {
        self.rng.gen_range(0..upper_bound)
    }
}

/// Deterministic generator yielding `0, 1, 2, ...` reduced modulo each bound.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequenceIndexGenerator {
    counter: usize,
}

impl SequenceIndexGenerator {
    pub fn new() -> Self {
        SequenceIndexGenerator { counter: 0 }
    }

    /// Number of indices handed out so far.
    pub fn calls(&self) -> usize {
        self.counter
    }
}

impl RandomIndexGenerator for SequenceIndexGenerator {
    fn next_index(&mut self, upper_bound: usize) -> usize {
        let index = self.counter % upper_bound;
        self.counter = self.counter.wrapping_add(1);
        index
    }
}

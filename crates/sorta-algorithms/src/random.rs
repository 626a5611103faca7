//! Randomness as an injected capability.
//!
//! Only intrinsically randomized algorithms (bogo sort) draw from a
//! [`RandomSource`]. Tests substitute a seeded or scripted source; callers
//! that do not care use [`Algorithm::generate_steps`](crate::Algorithm::generate_steps),
//! which draws from the thread-local generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

impl RandomSource for StdRng {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

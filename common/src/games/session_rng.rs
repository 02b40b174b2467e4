use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random choices the bot makes.
///
/// Production code uses [`SessionRng`]; tests can script the values to make
/// tie-breaks and the medium-difficulty coin flip assertable.
pub trait MoveRng {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin.
    fn coin_flip(&mut self) -> bool;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

impl MoveRng for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.random_bool()
    }
}

/// Replays fixed answers so tie-breaks and coin flips can be asserted.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    picks: std::collections::VecDeque<usize>,
    flips: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(picks: &[usize], flips: &[bool]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            flips: flips.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl MoveRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(true)
    }
}

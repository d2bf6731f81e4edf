//! Randomness collaborator
//!
//! Rules never touch a global RNG; they draw from a `RandomSource` handed in
//! through the update context. The range contract is half-open:
//! `random_int(min, max)` returns `min <= n < max`, and `min` when the range
//! is empty. A fair coin is therefore `random_int(0, 2) == 1`.

/// Seed used when none (or zero) is given; xorshift has a fixed point at 0
pub const DEFAULT_SEED: u32 = 12345;

pub trait RandomSource {
    /// Uniform integer in `[min, max)`
    fn random_int(&mut self, min: i32, max: i32) -> i32;

    /// 1-in-2 chance
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.random_int(0, 2) == 1
    }
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Deterministic default source backed by xorshift32
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        let r = xorshift32(&mut self.state) as u64;
        (min as i64 + (r % span) as i64) as i32
    }
}

//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the same deal, trump card and
//!   talon order, bit for bit.
//! - **Compatible**: the stream is Mulberry32 and the shuffle is a backward
//!   Fisher–Yates consuming `floor(u * (i + 1))`. Both are fixed, so a seed
//!   names a deal on any platform.
//! - **Seed streams**: `SeedStream` derives independent per-game seeds from a
//!   single match seed for self-play.
//!
//! ```
//! use la_chouine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_unit(), b.next_unit());
//! }
//! ```

use rand::{Error as RandError, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed type accepted by `new_game`.
pub type Seed = u32;

/// Exclusive upper bound for freshly generated seeds.
pub const MAX_GENERATED_SEED: Seed = 2_147_483_647;

/// Mulberry32: a 32-bit state generator with a single add-and-mix step.
///
/// Implements `RngCore` so it plugs into the `rand` ecosystem, but the deal
/// only ever consumes it through `GameRng::next_unit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates to the low 32 bits.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Seeded uniform stream used to shuffle the talon.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: Mulberry32,
    seed: Seed,
    draws: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: Mulberry32::new(seed),
            seed,
            draws: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of uniform values drawn so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        f64::from(self.inner.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `0..bound`, computed as `floor(u * bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_unit() * bound as f64).floor() as usize
    }

    /// Backward Fisher–Yates shuffle.
    ///
    /// Step `i` (from the last index down to 1) swaps `i` with
    /// `floor(u * (i + 1))`. This exact consumption order is part of the
    /// reproducibility contract; do not replace it with `SliceRandom::shuffle`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Draw a fresh seed from the thread-local entropy source.
#[must_use]
pub fn generate_seed() -> Seed {
    rand::thread_rng().gen_range(0..MAX_GENERATED_SEED)
}

/// Derives a reproducible sequence of per-game seeds from one match seed.
///
/// Uses ChaCha8 so that neighbouring match seeds give unrelated game seeds.
#[derive(Clone, Debug)]
pub struct SeedStream {
    inner: ChaCha8Rng,
    match_seed: u64,
    issued: u64,
}

impl SeedStream {
    #[must_use]
    pub fn new(match_seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(match_seed),
            match_seed,
            issued: 0,
        }
    }

    #[must_use]
    pub fn match_seed(&self) -> u64 {
        self.match_seed
    }

    /// Number of seeds handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Next game seed, in the same range as `generate_seed`.
    pub fn next_seed(&mut self) -> Seed {
        self.issued += 1;
        self.inner.gen_range(0..MAX_GENERATED_SEED)
    }
}

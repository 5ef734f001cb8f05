use std::{fmt, num::ParseIntError, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic secret selection.
///
/// Rendered as a 16-character hex string in both `Display` and serde form,
/// so a finished game can advertise its seed and a player can replay the
/// exact same game with `--seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed(u64);

impl GameSeed {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Derives a seed from an arbitrary key string via FNV-1a.
    ///
    /// Used for daily mode: the same date key always yields the same seed.
    /// Not cryptographic, and does not need to be; any stable key-to-seed
    /// mapping works here.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
        let mut hash = FNV_OFFSET;
        for byte in key.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self(hash)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for GameSeed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        hex.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid seed {hex:?}: {e}")))
    }
}

impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        GameSeed(rng.random())
    }
}

/// Maps a selection context to an index into the word list.
///
/// The session calls this exactly once at construction, with the word count
/// as the exclusive upper bound.
pub trait SecretPicker {
    fn pick(&mut self, word_count: usize) -> usize;
}

/// Uniform-random selection backed by a PCG generator.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    seed: GameSeed,
    rng: Pcg32,
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPicker {
    /// Picker with a freshly generated seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Picker with an explicit seed; the same seed always selects the same
    /// word from the same list.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed.0),
        }
    }

    /// The seed this picker was built with, for display and replay.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }
}

impl SecretPicker for RandomPicker {
    fn pick(&mut self, word_count: usize) -> usize {
        self.rng.random_range(0..word_count)
    }
}

/// Always selects the same index. Used by tests and debugging setups that
/// need a known secret.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl SecretPicker for FixedPicker {
    fn pick(&mut self, word_count: usize) -> usize {
        assert!(self.0 < word_count, "fixed index out of range");
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_16_hex_chars() {
        let seed = GameSeed::new(0x1234_5678_9abc_def0);
        assert_eq!(seed.to_string(), "123456789abcdef0");
        assert_eq!(GameSeed::new(0).to_string(), "0000000000000000");
    }

    #[test]
    fn from_str_roundtrips_display() {
        let seed: GameSeed = rand::rng().random();
        let parsed: GameSeed = seed.to_string().parse().unwrap();
        assert_eq!(seed, parsed);
    }

    #[test]
    fn from_str_rejects_non_hex() {
        assert!("not a seed".parse::<GameSeed>().is_err());
        assert!("".parse::<GameSeed>().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let seed = GameSeed::new(0xdead_beef);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"00000000deadbeef\"");
        let back: GameSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(seed, back);
    }

    #[test]
    fn same_seed_picks_the_same_index() {
        let seed = GameSeed::new(42);
        let mut a = RandomPicker::with_seed(seed);
        let mut b = RandomPicker::with_seed(seed);
        for _ in 0..20 {
            assert_eq!(a.pick(19), b.pick(19));
        }
    }

    #[test]
    fn key_derivation_is_stable() {
        let a = GameSeed::from_key("2026-08-28");
        let b = GameSeed::from_key("2026-08-28");
        let c = GameSeed::from_key("2026-08-29");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let mut picker = RandomPicker::new();
        for _ in 0..100 {
            assert!(picker.pick(7) < 7);
        }
    }
}

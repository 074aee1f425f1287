//! Key types for AES-128.

use crate::block::{state_from_block, Word};
use crate::error::{exact, Error};

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Returns the key as four column words.
    #[inline]
    pub fn words(&self) -> [Word; 4] {
        state_from_block(&self.0)
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        exact("key", value).map(Self)
    }
}

/// Expanded key schedule: 11 groups of 4 words (44 words in total).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [[Word; 4]; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &[Word; 4] {
        &self.0[round]
    }

    /// Iterates over all 44 schedule words in order.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.0.iter().flatten().copied()
    }
}

//! Bit-packed odd-number sieve bitmap
//!
//! Bit `i` of the concatenated bitmap stands for the odd number `3 + 2*i`:
//! set means composite, clear means prime. Each word carries
//! `bits_per_word` bits, least significant bit first. 2 is never stored.

use std::fmt;

use crate::error::{ConfigError, DecodeError};

/// Widest word the wire format can carry.
pub const MAX_BITS_PER_WORD: u32 = 64;

// ─── Word width ────────────────────────────────────────────────────────────

/// Number of bits used from each word, always in `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWidth(u32);

impl WordWidth {
    pub fn new(bits: u32) -> Result<Self, ConfigError> {
        if (1..=MAX_BITS_PER_WORD).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(ConfigError::BitsPerWord(bits.to_string()))
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WordWidth {
    fn default() -> Self {
        Self(32)
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bits needed to describe every odd candidate in `3..=limit`.
#[inline]
pub fn bits_needed(limit: u64) -> u64 {
    if limit < 3 { 0 } else { (limit - 3) / 2 + 1 }
}

// ─── Bitmap ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveBitmap {
    words: Vec<u64>,
    width: WordWidth,
}

impl SieveBitmap {
    pub fn from_words(words: Vec<u64>, width: WordWidth) -> Self {
        Self { words, width }
    }

    /// Parse whitespace-separated decimal words as printed by a sieve.
    pub fn parse(text: &str, width: WordWidth) -> Result<Self, DecodeError> {
        let words = text
            .split_ascii_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<u64>().map_err(|_| DecodeError::Parse {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words, width })
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn width(&self) -> WordWidth {
        self.width
    }

    /// Total number of addressable bits.
    pub fn len_bits(&self) -> u64 {
        self.words.len() as u64 * self.width.get() as u64
    }

    /// Fails when the bitmap cannot answer for every odd number up to `limit`.
    pub fn check_covers(&self, limit: u64) -> Result<(), DecodeError> {
        let needed = bits_needed(limit);
        let available = self.len_bits();
        if needed > available {
            return Err(DecodeError::TooShort { needed, available });
        }
        Ok(())
    }

    /// Whether bit `bit` is set. Caller guarantees `bit < len_bits()`.
    #[inline]
    pub fn is_composite(&self, bit: u64) -> bool {
        let width = self.width.get() as u64;
        let word = self.words[(bit / width) as usize];
        (word >> (bit % width)) & 1 == 1
    }

    /// Primes up to and including `limit`, in ascending order.
    pub fn primes(&self, limit: u64) -> Result<Primes<'_>, DecodeError> {
        self.check_covers(limit)?;
        Ok(Primes { bitmap: self, limit, next: 2 })
    }

    pub fn count_primes(&self, limit: u64) -> Result<u64, DecodeError> {
        Ok(self.primes(limit)?.count() as u64)
    }
}

/// Renders the wire format: one line of space-separated decimal words.
impl fmt::Display for SieveBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

// ─── Prime walk ────────────────────────────────────────────────────────────

/// Iterator over the primes a bitmap encodes, see [`SieveBitmap::primes`].
#[derive(Debug, Clone)]
pub struct Primes<'a> {
    bitmap: &'a SieveBitmap,
    limit: u64,
    next: u64,
}

impl Iterator for Primes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next == 2 {
            self.next = 3;
            if self.limit >= 2 {
                return Some(2);
            }
        }

        while self.next <= self.limit {
            let p = self.next;
            match p.checked_add(2) {
                Some(n) => self.next = n,
                None => self.limit = 0,
            }
            if !self.bitmap.is_composite((p - 3) / 2) {
                return Some(p);
            }
        }
        None
    }
}

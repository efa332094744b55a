//! Bit-packed reference sieve
//!
//! Produces bitmaps in the same layout the driver decodes:
//! - 1 bit per odd number from 3 upward (2 is implied)
//! - set bit = composite, clear bit = prime
//! - any word width from 1 to 64 bits, least significant bit first
//!
//! Backs the in-process runner and gives the tests known-good input.

use crate::bitmap::{bits_needed, SieveBitmap, WordWidth};

/// Largest `x` with `x * x <= n`, corrected from an f64 estimate.
#[inline]
fn isqrt(n: u64) -> u64 {
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |sq| sq > n) { x -= 1; }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) { x += 1; }
    x
}

/// Sieve every odd number in `3..=limit` into a composite bitmap.
pub fn sieve_bitmap(limit: u64, width: WordWidth) -> SieveBitmap {
    let w = width.get() as u64;
    let h = bits_needed(limit);
    let num_words = h.div_ceil(w) as usize;

    // All bits clear → assume every odd number is prime
    let mut b = vec![0u64; num_words];

    let sqrt_n = isqrt(limit);

    // ── Sieving phase: bit i ↔ odd number 2i + 3 ───────────────────
    let mut i = 0u64;
    while 2 * i + 3 <= sqrt_n {
        if (b[(i / w) as usize] >> (i % w)) & 1 == 0 {
            let step = 2 * i + 3;             // prime value = step
            let mut j = (step * step - 3) / 2; // bit of prime²
            while j < h {
                b[(j / w) as usize] |= 1u64 << (j % w);
                j += step;
            }
        }
        i += 1;
    }

    SieveBitmap::from_words(b, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::PRIME_COUNTS;

    fn width(bits: u32) -> WordWidth {
        WordWidth::new(bits).unwrap()
    }

    #[test]
    fn test_small_bitmaps() {
        // 3 5 7 9 → only 9 composite
        assert_eq!(sieve_bitmap(10, width(32)).words(), &[8]);
        // 3..=25: composites 9 15 21 25 at bits 3 6 9 11
        assert_eq!(sieve_bitmap(25, width(32)).words(), &[0b1010_0100_1000]);
    }

    #[test]
    fn test_edge_cases() {
        assert!(sieve_bitmap(0, width(32)).words().is_empty());
        assert!(sieve_bitmap(1, width(32)).words().is_empty());
        assert!(sieve_bitmap(2, width(32)).words().is_empty());
        assert_eq!(sieve_bitmap(3, width(32)).words(), &[0]);
    }

    #[test]
    fn test_word_count() {
        // 100 → 49 bits
        assert_eq!(sieve_bitmap(100, width(32)).words().len(), 2);
        assert_eq!(sieve_bitmap(100, width(64)).words().len(), 1);
        assert_eq!(sieve_bitmap(100, width(1)).words().len(), 49);
        assert_eq!(sieve_bitmap(100, width(7)).words().len(), 7);
    }

    #[test]
    fn test_known_counts() {
        for &(limit, expected) in PRIME_COUNTS.iter().filter(|(n, _)| *n <= 1_000_000) {
            for bits in [8, 32, 64] {
                let b = sieve_bitmap(limit, width(bits));
                assert_eq!(b.count_primes(limit).unwrap(), expected,
                    "Mismatch at n={} with {}-bit words", limit, bits);
            }
        }
    }

    #[test]
    fn test_matches_primal() {
        for n in [3, 4, 29, 30, 31, 997, 1_000, 65_536, 500_000] {
            let decoded: Vec<u64> = sieve_bitmap(n, width(32)).primes(n).unwrap().collect();
            let expected: Vec<u64> = primal::Primes::all()
                .take_while(|&p| p as u64 <= n)
                .map(|p| p as u64)
                .collect();
            assert_eq!(decoded, expected, "Mismatch at n={}", n);
        }
    }

    #[test]
    fn test_matches_primes_crate() {
        use primes::{PrimeSet, Sieve};

        let n = 100_000;
        let mut reference = Sieve::new();
        let expected = reference.iter().take_while(|&p| p <= n).count() as u64;
        for bits in [5, 31, 63] {
            assert_eq!(sieve_bitmap(n, width(bits)).count_primes(n).unwrap(), expected);
        }
    }

    #[test]
    fn test_isqrt_safety() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert_eq!(isqrt(1 << 52), 1 << 26);
    }
}

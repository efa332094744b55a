//! Property-based tests for the bitmap decoder
//!
//! The built-in sieve is the encoder; `primal` is the independent oracle.

use proptest::prelude::*;
use sieve_driver::sieve::sieve_bitmap;
use sieve_driver::{decode, SieveBitmap, WordWidth};

fn width() -> impl Strategy<Value = WordWidth> {
    (1u32..=64).prop_map(|bits| WordWidth::new(bits).unwrap())
}

proptest! {
    /// Decoding is a pure function of (text, width, limit)
    #[test]
    fn decode_is_idempotent(words in prop::collection::vec(any::<u64>(), 0..16), w in width()) {
        let bitmap = SieveBitmap::from_words(words, w);
        let text = bitmap.to_string();
        let limit = 2 + 2 * bitmap.len_bits();
        let first = decode(&text, w, limit, true).unwrap();
        let second = decode(&text, w, limit, true).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A correctly sieved bitmap yields π(limit) at every word width
    #[test]
    fn sieved_bitmap_counts_primes(limit in 0u64..20_000, w in width()) {
        let text = sieve_bitmap(limit, w).to_string();
        let count = decode(&text, w, limit, false).unwrap().count;
        let expected = primal::Primes::all().take_while(|&p| p as u64 <= limit).count() as u64;
        prop_assert_eq!(count, expected);
    }

    /// Emitted primes are ascending, bounded by the limit, and agree with the count
    #[test]
    fn emitted_primes_are_sorted(limit in 0u64..5_000, w in width()) {
        let text = sieve_bitmap(limit, w).to_string();
        let decoded = decode(&text, w, limit, true).unwrap();
        let primes = decoded.primes.unwrap();
        prop_assert_eq!(primes.len() as u64, decoded.count);
        prop_assert!(primes.windows(2).all(|p| p[0] < p[1]));
        prop_assert!(primes.iter().all(|&p| p <= limit));
    }

    /// Clearing composite bits can only add primes
    #[test]
    fn all_clear_bitmap_never_undercounts(limit in 3u64..10_000, w in width()) {
        let sieved = sieve_bitmap(limit, w);
        let clear = SieveBitmap::from_words(vec![0; sieved.words().len()], w);
        let truth = sieved.count_primes(limit).unwrap();
        let all = clear.count_primes(limit).unwrap();
        prop_assert!(all >= truth);
        prop_assert_eq!(all, 1 + (limit - 3) / 2 + 1);
    }
}

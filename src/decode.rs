//! Sieve output → prime count

use tracing::debug;

use crate::bitmap::{SieveBitmap, WordWidth};
use crate::error::DecodeError;

/// Result of decoding one sieve output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub count: u64,
    /// Every prime found, ascending; only collected when asked for.
    pub primes: Option<Vec<u64>>,
}

/// Parse `text` and count the primes up to `limit` it encodes.
pub fn decode(text: &str, width: WordWidth, limit: u64, emit: bool) -> Result<Decoded, DecodeError> {
    let bitmap = SieveBitmap::parse(text, width)?;
    debug!(words = bitmap.words().len(), bits = bitmap.len_bits(), limit, "decoding sieve output");

    let walk = bitmap.primes(limit)?;
    let decoded = if emit {
        let primes: Vec<u64> = walk.collect();
        Decoded { count: primes.len() as u64, primes: Some(primes) }
    } else {
        Decoded { count: walk.count() as u64, primes: None }
    };
    Ok(decoded)
}

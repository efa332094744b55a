//! Benchmark configuration

use std::time::Duration;

use crate::bitmap::WordWidth;

pub const DEFAULT_LIMIT: u64 = 100_000;
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(5);
pub const DEFAULT_INTERPRETER: &str = "whitespace";

/// Everything the benchmark loop and report need.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub bits_per_word: WordWidth,
    pub limit: u64,
    pub budget: Duration,
    /// Collect and print every prime found.
    pub show: bool,
    /// First field of the machine-readable result line.
    pub label: String,
}

impl BenchConfig {
    pub fn default_label(width: WordWidth) -> String {
        format!("rzuckerm-whitespace-{}bit", width)
    }

    /// Sieve program matching a word width.
    pub fn default_program(width: WordWidth) -> String {
        format!("primes-{}bit.ws", width)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        let bits_per_word = WordWidth::default();
        Self {
            bits_per_word,
            limit: DEFAULT_LIMIT,
            budget: DEFAULT_BUDGET,
            show: false,
            label: Self::default_label(bits_per_word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.bits_per_word.get(), 32);
        assert_eq!(config.limit, 100_000);
        assert_eq!(config.budget, Duration::from_secs(5));
        assert!(!config.show);
        assert_eq!(config.label, "rzuckerm-whitespace-32bit");
    }

    #[test]
    fn test_names_follow_width() {
        let width = WordWidth::new(8).unwrap();
        assert_eq!(BenchConfig::default_label(width), "rzuckerm-whitespace-8bit");
        assert_eq!(BenchConfig::default_program(width), "primes-8bit.ws");
    }
}

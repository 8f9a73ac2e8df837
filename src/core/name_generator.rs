//! Temporary name generators used by the first rename phase.
//!
//! # Public API
//! - [`NameGenerator`]: Anything that can produce a name of a desired length
//! - [`TempNameGenerator`]: The generators selectable from config or the command line
//!
//! Any `Fn(usize) -> String` is a [`NameGenerator`] as well.

use crate::core::error::{BulkRenameError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub const MAX_TEMP_NAME_LENGTH: usize = 64;

const ALPHANUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub trait NameGenerator {
    /// Produce a candidate name. `desired_length` is a hint some generators ignore.
    fn generate(&self, desired_length: usize) -> String;
}

impl<F> NameGenerator for F
where
    F: Fn(usize) -> String,
{
    fn generate(&self, desired_length: usize) -> String {
        self(desired_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempNameGenerator {
    /// 32 lowercase hex characters
    Guid,
    /// Fixed number of characters from `0-9A-Z`
    AlphaNum(usize),
    /// As many characters from `0-9A-Z` as the name being replaced
    AlphaNumVariableLength,
}

impl Default for TempNameGenerator {
    fn default() -> Self {
        TempNameGenerator::AlphaNum(8)
    }
}

impl NameGenerator for TempNameGenerator {
    fn generate(&self, desired_length: usize) -> String {
        match self {
            TempNameGenerator::Guid => uuid::Uuid::new_v4().simple().to_string(),
            TempNameGenerator::AlphaNum(length) => random_alphanum(*length),
            TempNameGenerator::AlphaNumVariableLength => random_alphanum(desired_length),
        }
    }
}

impl FromStr for TempNameGenerator {
    type Err = BulkRenameError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if lower == "guid" {
            return Ok(TempNameGenerator::Guid);
        }

        if let Some(suffix) = lower.strip_prefix("alphanum") {
            if suffix == "variablelength" {
                return Ok(TempNameGenerator::AlphaNumVariableLength);
            }
            if let Ok(length) = suffix.parse::<usize>() {
                if length > 0 {
                    return Ok(TempNameGenerator::AlphaNum(length.min(MAX_TEMP_NAME_LENGTH)));
                }
            }
        }

        Err(BulkRenameError::unknown_name_generator(trimmed))
    }
}

impl fmt::Display for TempNameGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempNameGenerator::Guid => write!(f, "GUID"),
            TempNameGenerator::AlphaNum(length) => write!(f, "AlphaNum{length}"),
            TempNameGenerator::AlphaNumVariableLength => write!(f, "AlphaNumVariableLength"),
        }
    }
}

fn random_alphanum(length: usize) -> String {
    let length = length.clamp(1, MAX_TEMP_NAME_LENGTH);
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHANUM[rng.random_range(0..ALPHANUM.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_names() {
        assert_eq!("GUID".parse::<TempNameGenerator>().unwrap(), TempNameGenerator::Guid);
        assert_eq!("guid".parse::<TempNameGenerator>().unwrap(), TempNameGenerator::Guid);
        assert_eq!(
            "AlphaNum16".parse::<TempNameGenerator>().unwrap(),
            TempNameGenerator::AlphaNum(16)
        );
        assert_eq!(
            "alphanumvariablelength".parse::<TempNameGenerator>().unwrap(),
            TempNameGenerator::AlphaNumVariableLength
        );
    }

    #[test]
    fn test_parse_caps_length() {
        assert_eq!(
            "AlphaNum500".parse::<TempNameGenerator>().unwrap(),
            TempNameGenerator::AlphaNum(MAX_TEMP_NAME_LENGTH)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["", "AlphaNum", "AlphaNum0", "AlphaNumX", "random"] {
            let err = bad.parse::<TempNameGenerator>().unwrap_err();
            assert!(err.to_string().contains("Unknown temporary name generator"));
        }
    }

    #[test]
    fn test_display_round_trips() {
        for generator in [
            TempNameGenerator::Guid,
            TempNameGenerator::AlphaNum(12),
            TempNameGenerator::AlphaNumVariableLength,
        ] {
            assert_eq!(generator.to_string().parse::<TempNameGenerator>().unwrap(), generator);
        }
    }

    #[test]
    fn test_guid_shape() {
        let name = TempNameGenerator::Guid.generate(3);
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_alphanum_lengths_and_charset() {
        let fixed = TempNameGenerator::AlphaNum(8).generate(100);
        assert_eq!(fixed.len(), 8);
        assert!(fixed.bytes().all(|b| ALPHANUM.contains(&b)));

        let variable = TempNameGenerator::AlphaNumVariableLength.generate(5);
        assert_eq!(variable.len(), 5);

        let capped = TempNameGenerator::AlphaNumVariableLength.generate(1000);
        assert_eq!(capped.len(), MAX_TEMP_NAME_LENGTH);
    }

    #[test]
    fn test_closure_is_a_generator() {
        let fixed = |len: usize| "x".repeat(len);
        assert_eq!(fixed.generate(3), "xxx");
    }
}

//! Registration token generation and validation.
//!
//! Tokens look like `jet-2025-AB12C`: the literal prefix, the registration
//! year and five characters from `0-9A-Z`. They are the identifier handed to
//! teams and used for later lookups, so the format is a public contract.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const TOKEN_PREFIX: &str = "jet";
pub const TOKEN_SUFFIX_LEN: usize = 5;
pub const TOKEN_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^jet-[0-9]{4}-[A-Z0-9]{5}$").expect("registration token pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed registration token: {0:?}")]
    Malformed(String),
    #[error("year {0} cannot be encoded as four digits")]
    YearOutOfRange(i32),
}

/// Which random source produced the token suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// Operating system CSPRNG.
    Secure,
    /// Time-seeded PRNG used when the OS source failed. Predictable.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistrationToken(String);

impl RegistrationToken {
    /// Generate a token for `year` using the OS random source.
    ///
    /// Falls back to a non-secure PRNG if the OS source fails; the returned
    /// [`EntropySource`] tells the caller which one was used.
    pub fn generate(year: i32) -> Result<(Self, EntropySource), TokenError> {
        Self::generate_with(year, &mut OsRng)
    }

    /// Same as [`generate`](Self::generate) with an explicit primary source.
    pub fn generate_with<R: TryRngCore>(
        year: i32,
        rng: &mut R,
    ) -> Result<(Self, EntropySource), TokenError> {
        if !(0..=9999).contains(&year) {
            return Err(TokenError::YearOutOfRange(year));
        }
        let mut bytes = [0u8; TOKEN_SUFFIX_LEN];
        let source = fill_entropy(rng, &mut bytes);
        Ok((Self::from_entropy(year, &bytes)?, source))
    }

    /// Build a token from raw random bytes.
    ///
    /// Each byte is reduced with `byte % 36`. Since 256 is not a multiple of
    /// 36, the first four alphabet characters (`0`..`3`) come up slightly more
    /// often (8/256 versus 7/256).
    pub fn from_entropy(year: i32, bytes: &[u8; TOKEN_SUFFIX_LEN]) -> Result<Self, TokenError> {
        if !(0..=9999).contains(&year) {
            return Err(TokenError::YearOutOfRange(year));
        }
        let suffix: String = bytes
            .iter()
            .map(|b| TOKEN_ALPHABET[(*b as usize) % TOKEN_ALPHABET.len()] as char)
            .collect();
        Ok(Self(format!("{TOKEN_PREFIX}-{year:04}-{suffix}")))
    }

    /// Parse an existing token. No normalization is applied.
    pub fn parse(value: &str) -> Result<Self, TokenError> {
        if is_valid_registration_token(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(TokenError::Malformed(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> u16 {
        // Shape is guaranteed by construction.
        self.0[4..8].parse().unwrap_or_default()
    }
}

/// True iff `token` matches `jet-YYYY-XXXXX` exactly (case sensitive).
pub fn is_valid_registration_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

fn fill_entropy<R: TryRngCore>(rng: &mut R, buf: &mut [u8]) -> EntropySource {
    match rng.try_fill_bytes(buf) {
        Ok(()) => EntropySource::Secure,
        Err(err) => {
            warn!(
                error = %err,
                "secure random source unavailable, falling back to non-secure generator"
            );
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            StdRng::seed_from_u64(seed).fill_bytes(buf);
            EntropySource::Fallback
        }
    }
}

impl fmt::Display for RegistrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RegistrationToken {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_registration_token(&value) {
            Ok(Self(value))
        } else {
            Err(TokenError::Malformed(value))
        }
    }
}

impl From<RegistrationToken> for String {
    fn from(token: RegistrationToken) -> Self {
        token.0
    }
}

impl AsRef<str> for RegistrationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

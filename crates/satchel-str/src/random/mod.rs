//! Cryptographically secure random strings.
//!
//! All draws go through a `RandomSource`. Production code uses the
//! platform generator exposed by `ring`; tests inject deterministic
//! sources. Characters are selected by rejection sampling so every
//! member of a character set is equally likely.

use ring::rand::{SecureRandom, SystemRandom};
use satchel_core::{SatchelError, SatchelResult};
use tracing::error;

/// Upper-case, lower-case and digits
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Digits only
pub const NUMERIC: &str = "0123456789";

/// Alphanumeric plus the punctuation used for password-like strings
pub const WITH_SPECIAL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{};:,.<>/?";

// Standard base64 alphabet; indices 62 and 63 ('+', '/') are dropped
const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// A source of secure random bytes
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes
    fn fill(&self, dest: &mut [u8]) -> SatchelResult<()>;
}

/// The platform's secure random generator
#[derive(Debug)]
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn fill(&self, dest: &mut [u8]) -> SatchelResult<()> {
        self.rng.fill(dest).map_err(|_| {
            error!("System random source failed to produce {} bytes", dest.len());
            SatchelError::RandomUnavailable
        })
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill(&self, dest: &mut [u8]) -> SatchelResult<()> {
        (**self).fill(dest)
    }
}

/// Random string generator over an injected source
#[derive(Debug)]
pub struct Generator<R = SystemRandomSource> {
    source: R,
}

impl Generator<SystemRandomSource> {
    /// Generator backed by the platform's secure source
    pub fn system() -> Self {
        Self::new(SystemRandomSource::new())
    }
}

impl Default for Generator<SystemRandomSource> {
    fn default() -> Self {
        Self::system()
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Alphanumeric string drawn from the base64 alphabet
    pub fn random(&self, length: usize) -> SatchelResult<String> {
        self.base64_alphanumeric(length)
    }

    /// ASCII string drawn from the base64 alphabet
    pub fn random_ascii(&self, length: usize) -> SatchelResult<String> {
        self.base64_alphanumeric(length)
    }

    pub fn random_numeric(&self, length: usize) -> SatchelResult<String> {
        self.random_string(length, Some(NUMERIC))
    }

    pub fn random_alphanumeric(&self, length: usize) -> SatchelResult<String> {
        self.random_string(length, Some(ALPHANUMERIC))
    }

    /// Alias of `random_alphanumeric`
    pub fn random_string_with_numeric(&self, length: usize) -> SatchelResult<String> {
        self.random_alphanumeric(length)
    }

    pub fn random_string_with_special_character(&self, length: usize) -> SatchelResult<String> {
        self.random_string(length, Some(WITH_SPECIAL))
    }

    /// String of `length` characters drawn uniformly from `charset`.
    ///
    /// The charset is split into code points, so multi-byte characters are
    /// drawn whole. `None` uses the alphanumeric set.
    pub fn random_string(&self, length: usize, charset: Option<&str>) -> SatchelResult<String> {
        let charset: Vec<char> = charset.unwrap_or(ALPHANUMERIC).chars().collect();
        if charset.is_empty() {
            return Err(SatchelError::EmptyCharset);
        }

        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(charset[self.uniform_index(charset.len())?]);
        }
        Ok(out)
    }

    // Index in 0..n without modulo bias
    fn uniform_index(&self, n: usize) -> SatchelResult<usize> {
        let n = n as u64;
        if n == 1 {
            return Ok(0);
        }

        let span = 1u64 << 32;
        let bound = span - span % n;
        loop {
            let mut buf = [0u8; 4];
            self.source.fill(&mut buf)?;
            let draw = u64::from(u32::from_le_bytes(buf));
            if draw < bound {
                return Ok((draw % n) as usize);
            }
        }
    }

    fn base64_alphanumeric(&self, length: usize) -> SatchelResult<String> {
        let mut out = String::with_capacity(length);
        let mut buf = vec![0u8; length.max(1)];

        while out.len() < length {
            let remaining = length - out.len();
            let chunk = &mut buf[..remaining];
            self.source.fill(chunk)?;

            // Each byte's top six bits index the alphabet
            out.extend(
                chunk
                    .iter()
                    .map(|byte| usize::from(byte >> 2))
                    .filter(|&index| index < 62)
                    .map(|index| char::from(BASE64_ALPHABET[index])),
            );
        }
        Ok(out)
    }
}

pub fn random(length: usize) -> SatchelResult<String> {
    Generator::system().random(length)
}

pub fn random_ascii(length: usize) -> SatchelResult<String> {
    Generator::system().random_ascii(length)
}

pub fn random_numeric(length: usize) -> SatchelResult<String> {
    Generator::system().random_numeric(length)
}

pub fn random_alphanumeric(length: usize) -> SatchelResult<String> {
    Generator::system().random_alphanumeric(length)
}

pub fn random_string_with_numeric(length: usize) -> SatchelResult<String> {
    Generator::system().random_string_with_numeric(length)
}

pub fn random_string_with_special_character(length: usize) -> SatchelResult<String> {
    Generator::system().random_string_with_special_character(length)
}

pub fn random_string(length: usize, charset: Option<&str>) -> SatchelResult<String> {
    Generator::system().random_string(length, charset)
}

use crate::{
    Result,
    constants::{MAX_UID_BYTES, MAX_UID_HEX_LEN, MIN_UID_BYTES, MIN_UID_HEX_LEN},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Card UID as read from a proximity reader (lowercase hex, 8-20 chars)
///
/// A `CardUid` is the hex encoding of a 4-10 byte ISO 14443 unique
/// identifier. It is normalized to lowercase on construction and is
/// immutable afterwards.
///
/// # Security
/// This type implements constant-time comparison to prevent timing attacks
/// when card identifiers are compared during deduplication.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct CardUid(String);

impl CardUid {
    /// Create a card UID from its hex representation, with validation.
    ///
    /// The value is normalized (trimmed and converted to lowercase) before
    /// validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidCardUid` if:
    /// - The length is not between 8-20 characters
    /// - The length is odd (UIDs encode whole bytes)
    /// - The value contains non-hex characters
    pub fn new(uid: &str) -> Result<Self> {
        let uid = uid.trim().to_lowercase();

        let len = uid.len();
        if !(MIN_UID_HEX_LEN..=MAX_UID_HEX_LEN).contains(&len) {
            return Err(Error::InvalidCardUid(format!(
                "UID must be {MIN_UID_HEX_LEN}-{MAX_UID_HEX_LEN} hex chars, got {len}"
            )));
        }

        if len % 2 != 0 {
            return Err(Error::InvalidCardUid(format!(
                "UID must encode whole bytes, got {len} hex chars"
            )));
        }

        if !uid.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidCardUid(format!("UID is not hex: {uid}")));
        }

        Ok(CardUid(uid))
    }

    /// Encode raw UID bytes from a driver as a lowercase hex UID.
    ///
    /// # Errors
    /// Returns `Error::InvalidCardUid` if the byte count is outside the
    /// 4-10 range allowed by ISO 14443.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = bytes.len();
        if !(MIN_UID_BYTES..=MAX_UID_BYTES).contains(&len) {
            return Err(Error::InvalidCardUid(format!(
                "UID must be {MIN_UID_BYTES}-{MAX_UID_BYTES} bytes, got {len}"
            )));
        }

        let hex = bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join("");
        Ok(CardUid(hex))
    }

    /// Get the UID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardUid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardUid::new(s)
    }
}

/// Constant-time comparison implementation for CardUid
///
/// Comparison takes the same time regardless of where the strings differ.
impl PartialEq for CardUid {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

/// Hash implementation for CardUid
///
/// Implements standard hashing for use in hash-based collections.
impl std::hash::Hash for CardUid {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// User identity a card gets bound to (an email-like account string)
///
/// A `UserLogin` is produced by a resolver, never by the core itself, so
/// construction only rejects empty input. The registry needs the routing
/// domain after the single `@`; [`UserLogin::domain`] performs that check
/// at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserLogin(String);

impl UserLogin {
    /// Create a user login, rejecting empty input.
    ///
    /// # Errors
    /// Returns `Error::InvalidLogin` if the trimmed value is empty.
    pub fn new(login: &str) -> Result<Self> {
        let login = login.trim();
        if login.is_empty() {
            return Err(Error::InvalidLogin("login must not be empty".to_string()));
        }
        Ok(UserLogin(login.to_string()))
    }

    /// Get the login as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Routing domain: the part after the single `@` separator.
    ///
    /// # Errors
    /// Returns `Error::InvalidLogin` unless the login contains exactly one
    /// `@`. The registry requires the domain for request routing; callers
    /// must run this check before any network round-trip.
    pub fn domain(&self) -> Result<&str> {
        let mut fragments = self.0.split('@');
        match (fragments.next(), fragments.next(), fragments.next()) {
            (Some(_), Some(domain), None) => Ok(domain),
            _ => Err(Error::InvalidLogin(format!(
                "login must contain exactly one '@': {}",
                self.0
            ))),
        }
    }
}

impl fmt::Display for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserLogin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        UserLogin::new(s)
    }
}

/// A card-to-identity assignment intent
///
/// Exists only for the duration of one loop iteration; its durable traces
/// are the audit line and the dedup entry written by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub card: CardUid,
    pub login: UserLogin,
}

impl Pairing {
    #[must_use]
    pub fn new(card: CardUid, login: UserLogin) -> Self {
        Self { card, login }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.card, self.login)
    }
}

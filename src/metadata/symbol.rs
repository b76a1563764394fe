//! Fixed-width symbol identifiers.
//!
//! A [`SymbolId`] names one declaration across the whole metadata graph. The extraction layer
//! derives it from the declaration's unified symbol resolution string (USR); the writer only
//! transports the 20 raw bytes.

use std::fmt;

use sha1::{Digest, Sha1};

/// Size of a [`SymbolId`] in bytes.
pub const SYMBOL_ID_SIZE: usize = 20;

/// Opaque 20 byte identifier of a declaration.
///
/// Identical declarations always produce identical identifiers, which makes the value usable
/// both as a field and as a cross-reference key between independently written units. The
/// all-zero value is reserved as "no symbol" and is never a valid mandatory identifier.
///
/// # Examples
///
/// ```rust
/// use docscope::metadata::SymbolId;
///
/// let id = SymbolId::from_usr("c:@N@std@S@vector");
/// assert!(!id.is_zero());
/// assert_eq!(id, SymbolId::from_usr("c:@N@std@S@vector"));
/// assert!(SymbolId::ZERO.is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolId(pub [u8; SYMBOL_ID_SIZE]);

impl SymbolId {
    /// The reserved "no symbol" identifier.
    pub const ZERO: SymbolId = SymbolId([0; SYMBOL_ID_SIZE]);

    /// Wraps raw identifier bytes.
    #[must_use]
    pub const fn new(bytes: [u8; SYMBOL_ID_SIZE]) -> Self {
        SymbolId(bytes)
    }

    /// Derives the identifier of a declaration from its USR (SHA-1 of the USR bytes).
    #[must_use]
    pub fn from_usr(usr: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(usr.as_bytes());

        let mut bytes = [0u8; SYMBOL_ID_SIZE];
        bytes.copy_from_slice(&hasher.finalize());
        SymbolId(bytes)
    }

    /// Builds an identifier from a slice, `None` unless it is exactly [`SYMBOL_ID_SIZE`] long.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(SymbolId)
    }

    /// The raw identifier bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SYMBOL_ID_SIZE] {
        &self.0
    }

    /// Returns true for the reserved "no symbol" value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; SYMBOL_ID_SIZE]
    }
}

impl From<[u8; SYMBOL_ID_SIZE]> for SymbolId {
    fn from(bytes: [u8; SYMBOL_ID_SIZE]) -> Self {
        SymbolId(bytes)
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({self})")
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

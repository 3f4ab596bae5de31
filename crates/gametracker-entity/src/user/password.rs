//! Password field carried by user writes.

use std::fmt;

/// State of the password on a user write.
///
/// The store's write hook only hashes a `Plain` value; `Unchanged` leaves
/// the stored digest exactly as it is.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum PasswordField {
    /// The write does not touch the password.
    #[default]
    Unchanged,
    /// A new plaintext password that must be hashed before persistence.
    Plain(String),
}

impl PasswordField {
    /// Whether this write modifies the password.
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Plain(_))
    }

    /// The new plaintext, if any.
    pub fn plaintext(&self) -> Option<&str> {
        match self {
            Self::Plain(p) => Some(p),
            Self::Unchanged => None,
        }
    }
}

impl From<Option<String>> for PasswordField {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unchanged, Self::Plain)
    }
}

impl fmt::Debug for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "Unchanged"),
            Self::Plain(_) => write!(f, "Plain(<redacted>)"),
        }
    }
}

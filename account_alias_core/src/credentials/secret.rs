//! Secret string holder for credential overrides

use std::fmt;
use zeroize::Zeroize;

/// A secret that zeros its memory when dropped
///
/// Used for secret access keys passed on the command line. `Debug` and
/// `Display` are redacted so the value never ends up in log output.
#[derive(Clone)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Borrow the secret value
    ///
    /// Callers must not log or persist the returned slice.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Constant-time comparison
    pub fn constant_time_eq(&self, other: &Self) -> bool {
        let (a, b) = (self.inner.as_bytes(), other.inner.as_bytes());
        if a.len() != b.len() {
            return false;
        }

        a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString(***)")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.constant_time_eq(other)
    }
}

impl Eq for SecureString {}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let secure = SecureString::new("wJalrXUtnFEMI/K7MDENG");
        assert_eq!(format!("{secure:?}"), "SecureString(***)");
        assert_eq!(format!("{secure}"), "***");
        assert_eq!(secure.expose_secret(), "wJalrXUtnFEMI/K7MDENG");
    }

    #[test]
    fn test_constant_time_comparison() {
        let a = SecureString::new("secret123");
        let b = SecureString::from("secret123");
        let c = SecureString::new("secret124");
        let d = SecureString::new("short");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}

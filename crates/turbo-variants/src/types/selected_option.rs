//! A single option choice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selected product option (e.g., Color: Red).
///
/// Callers treat `name` as a key, but nothing stops a list from holding the
/// same name twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Color", "Size").
    pub name: String,
    /// Chosen value (e.g., "Red", "Large").
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for SelectedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for SelectedOption {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SelectedOption::new("Color", "Red").to_string(), "Color: Red");
    }

    #[test]
    fn test_from_tuple() {
        let opt: SelectedOption = ("Size", "Large").into();
        assert_eq!(opt, SelectedOption::new("Size", "Large"));
    }
}

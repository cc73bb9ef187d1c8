//! Option normalization for lenient matching.
//!
//! Matching is strict by default: "Color" and " color" are different names.
//! Callers opt in to trimming, case folding and ordering here, and must apply
//! the same settings to both sides of a comparison.

use crate::types::SelectedOption;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use turbo_urlstate::number::locale_compare;

/// Case folding strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Keep original casing.
    #[default]
    None,
    Lowercase,
    Uppercase,
}

/// Normalization settings. The default changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Trim whitespace from names and values.
    pub trim: bool,
    /// Case folding applied to names and values.
    pub casing: Casing,
    /// Sort options by name.
    pub sort: bool,
}

impl NormalizeOptions {
    /// Trim, lowercase and sort.
    pub fn lenient() -> Self {
        Self {
            trim: true,
            casing: Casing::Lowercase,
            sort: true,
        }
    }
}

/// Return a normalized copy of `options`.
///
/// ```rust
/// use turbo_variants::prelude::*;
///
/// let normalized = normalize_selected_options(
///     &[SelectedOption::new(" Color ", "RED")],
///     &NormalizeOptions::lenient(),
/// );
/// assert_eq!(normalized, vec![SelectedOption::new("color", "red")]);
/// ```
pub fn normalize_selected_options(
    options: &[SelectedOption],
    settings: &NormalizeOptions,
) -> Vec<SelectedOption> {
    let mut normalized: Vec<SelectedOption> = options
        .iter()
        .map(|opt| SelectedOption {
            name: normalize_text(&opt.name, settings),
            value: normalize_text(&opt.value, settings),
        })
        .collect();

    if settings.sort {
        normalized.sort_by(|a, b| locale_compare(&a.name, &b.name));
    }

    normalized
}

fn normalize_text(text: &str, settings: &NormalizeOptions) -> String {
    let text = if settings.trim { text.trim() } else { text };
    match settings.casing {
        Casing::None => text.to_string(),
        Casing::Lowercase => text.to_lowercase(),
        Casing::Uppercase => text.to_uppercase(),
    }
}

/// Normalize only when asked, borrowing otherwise.
pub(crate) fn maybe_normalize<'a>(
    options: &'a [SelectedOption],
    settings: Option<&NormalizeOptions>,
) -> Cow<'a, [SelectedOption]> {
    match settings {
        Some(settings) => Cow::Owned(normalize_selected_options(options, settings)),
        None => Cow::Borrowed(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> Vec<SelectedOption> {
        pairs.iter().map(|(n, v)| SelectedOption::new(*n, *v)).collect()
    }

    #[test]
    fn test_default_is_identity() {
        let input = opts(&[(" Size ", "Large"), ("Color", "RED")]);
        assert_eq!(normalize_selected_options(&input, &NormalizeOptions::default()), input);
    }

    #[test]
    fn test_trim() {
        let settings = NormalizeOptions {
            trim: true,
            ..Default::default()
        };
        let out = normalize_selected_options(&opts(&[(" Color ", " Red ")]), &settings);
        assert_eq!(out, opts(&[("Color", "Red")]));
    }

    #[test]
    fn test_casing() {
        let lower = NormalizeOptions {
            casing: Casing::Lowercase,
            ..Default::default()
        };
        let upper = NormalizeOptions {
            casing: Casing::Uppercase,
            ..Default::default()
        };
        let input = opts(&[("Color", "Red")]);
        assert_eq!(normalize_selected_options(&input, &lower), opts(&[("color", "red")]));
        assert_eq!(normalize_selected_options(&input, &upper), opts(&[("COLOR", "RED")]));
    }

    #[test]
    fn test_sort_by_name_lowercase_first() {
        let settings = NormalizeOptions {
            sort: true,
            ..Default::default()
        };
        let input = opts(&[("size", "M"), ("Color", "Red"), ("color", "Blue")]);
        let out = normalize_selected_options(&input, &settings);
        assert_eq!(out, opts(&[("color", "Blue"), ("Color", "Red"), ("size", "M")]));
    }

    #[test]
    fn test_lenient() {
        let input = opts(&[(" Size", "LARGE "), ("Color ", " Red")]);
        let out = normalize_selected_options(&input, &NormalizeOptions::lenient());
        assert_eq!(out, opts(&[("color", "red"), ("size", "large")]));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let input = opts(&[(" Color ", "RED")]);
        let before = input.clone();
        normalize_selected_options(&input, &NormalizeOptions::lenient());
        assert_eq!(input, before);
    }

    #[test]
    fn test_maybe_normalize_borrows() {
        let input = opts(&[("Color", "Red")]);
        assert!(matches!(maybe_normalize(&input, None), Cow::Borrowed(_)));
        assert!(matches!(
            maybe_normalize(&input, Some(&NormalizeOptions::lenient())),
            Cow::Owned(_)
        ));
    }
}

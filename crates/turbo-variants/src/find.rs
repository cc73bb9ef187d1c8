//! Selection -> variant lookup.

use crate::normalize::{maybe_normalize, NormalizeOptions};
use crate::types::{Product, SelectedOption, VariantLike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Options for [`find_variant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindVariantOptions {
    /// Normalize the selection and every variant's options before matching.
    pub normalize: bool,
    /// Settings used when `normalize` is on.
    pub normalize_options: NormalizeOptions,
}

impl FindVariantOptions {
    /// Match after normalizing both sides with `settings`.
    pub fn normalized(settings: NormalizeOptions) -> Self {
        Self {
            normalize: true,
            normalize_options: settings,
        }
    }

    pub(crate) fn settings(&self) -> Option<&NormalizeOptions> {
        self.normalize.then_some(&self.normalize_options)
    }
}

/// Why a lookup did or did not produce a variant.
///
/// The string forms are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindVariantReason {
    /// Every selected option matched one variant.
    ExactMatch,
    /// The selection is complete but no variant carries it.
    NoMatch,
    /// Fewer options selected than the product has axes.
    Incomplete,
    /// A selected option name is not one of the product's axes.
    InvalidOption,
}

impl FindVariantReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindVariantReason::ExactMatch => "EXACT_MATCH",
            FindVariantReason::NoMatch => "NO_MATCH",
            FindVariantReason::Incomplete => "INCOMPLETE",
            FindVariantReason::InvalidOption => "INVALID_OPTION",
        }
    }
}

impl fmt::Display for FindVariantReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`find_variant`].
#[derive(Debug, PartialEq)]
pub enum FindVariantResult<'a, V> {
    /// Exact match.
    Found(&'a V),
    /// No variant, with the reason (never [`FindVariantReason::ExactMatch`]).
    NotFound(FindVariantReason),
}

// Manual impls: derive would require `V: Clone`.
impl<V> Clone for FindVariantResult<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for FindVariantResult<'_, V> {}

impl<'a, V> FindVariantResult<'a, V> {
    pub fn found(&self) -> bool {
        matches!(self, FindVariantResult::Found(_))
    }

    /// The matched variant, if any.
    pub fn variant(&self) -> Option<&'a V> {
        match self {
            FindVariantResult::Found(variant) => Some(variant),
            FindVariantResult::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> FindVariantReason {
        match self {
            FindVariantResult::Found(_) => FindVariantReason::ExactMatch,
            FindVariantResult::NotFound(reason) => *reason,
        }
    }
}

/// Find the variant for a user's option selection.
///
/// Checks, in order: the selection names at least as many options as the
/// product has axes (`INCOMPLETE`), every selected name is a product axis
/// (`INVALID_OPTION`), then returns the first variant in catalog order that
/// carries every selected value (`EXACT_MATCH`, else `NO_MATCH`).
///
/// ```rust
/// use turbo_variants::prelude::*;
///
/// let product = Product::new(
///     ["Color", "Size"],
///     vec![
///         Variant::new("1", Price::new("10.00", "USD")).with_option("Color", "Red").with_option("Size", "Small"),
///         Variant::new("2", Price::new("12.00", "USD")).with_option("Color", "Red").with_option("Size", "Large"),
///     ],
/// );
///
/// let result = find_variant(
///     &product,
///     &[SelectedOption::new("Color", "Red"), SelectedOption::new("Size", "Large")],
///     &FindVariantOptions::default(),
/// );
/// assert_eq!(result.variant().map(|v| v.id.as_str()), Some("2"));
/// assert_eq!(result.reason(), FindVariantReason::ExactMatch);
/// ```
pub fn find_variant<'a, V: VariantLike>(
    product: &'a Product<V>,
    selected_options: &[SelectedOption],
    options: &FindVariantOptions,
) -> FindVariantResult<'a, V> {
    let settings = options.settings();
    let search = maybe_normalize(selected_options, settings);

    if search.len() < product.options.len() {
        tracing::trace!(
            selected = search.len(),
            required = product.options.len(),
            "selection incomplete"
        );
        return FindVariantResult::NotFound(FindVariantReason::Incomplete);
    }

    let valid_names: HashSet<&str> = product.options.iter().map(|o| o.name.as_str()).collect();
    if let Some(invalid) = search.iter().find(|opt| !valid_names.contains(opt.name.as_str())) {
        tracing::debug!(option = %invalid.name, "selection names an unknown option");
        return FindVariantResult::NotFound(FindVariantReason::InvalidOption);
    }

    product
        .variants()
        .iter()
        .find(|variant| {
            let variant_options = maybe_normalize(variant.selected_options(), settings);
            matches_selection(&search, &variant_options)
        })
        .map(FindVariantResult::Found)
        .unwrap_or(FindVariantResult::NotFound(FindVariantReason::NoMatch))
}

/// Whether `variant_options` carries every pair in `search`.
///
/// Each selected name is compared against the first variant option with that
/// name; duplicate names in `search` are each checked on their own.
pub(crate) fn matches_selection(search: &[SelectedOption], variant_options: &[SelectedOption]) -> bool {
    search.iter().all(|wanted| {
        variant_options
            .iter()
            .find(|vo| vo.name == wanted.name)
            .is_some_and(|vo| vo.value == wanted.value)
    })
}

//! Which option values can still lead to a variant.

use crate::find::{find_variant, matches_selection, FindVariantOptions};
use crate::normalize::{maybe_normalize, NormalizeOptions};
use crate::types::{Product, SelectedOption, VariantLike};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Option name -> values reachable under the current selection.
///
/// Ordered so that results are deterministic.
pub type AvailabilityMap = BTreeMap<String, BTreeSet<String>>;

/// Options for [`get_availability_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityOptions {
    /// Only consider variants that are available for sale.
    pub only_available: bool,
    pub normalize: bool,
    pub normalize_options: NormalizeOptions,
}

impl Default for AvailabilityOptions {
    fn default() -> Self {
        Self {
            only_available: true,
            normalize: false,
            normalize_options: NormalizeOptions::default(),
        }
    }
}

impl AvailabilityOptions {
    /// Count sold-out variants too.
    pub fn including_unavailable(mut self) -> Self {
        self.only_available = false;
        self
    }

    /// Normalize both sides with `settings` before comparing.
    pub fn normalized(mut self, settings: NormalizeOptions) -> Self {
        self.normalize = true;
        self.normalize_options = settings;
        self
    }
}

/// Compute the values still available for every option given a partial
/// selection.
///
/// A variant contributes all of its options when it passes the availability
/// filter and carries every pair in `partial_selection`. Selected axes are
/// included too, so the map can drive a whole selector UI.
///
/// ```rust
/// use turbo_variants::prelude::*;
///
/// let product = Product::new(
///     ["Color", "Size"],
///     vec![
///         Variant::new("1", Price::new("10.00", "USD")).with_option("Color", "Red").with_option("Size", "S"),
///         Variant::new("2", Price::new("10.00", "USD")).with_option("Color", "Red").with_option("Size", "L"),
///         Variant::new("3", Price::new("10.00", "USD")).with_option("Color", "Blue").with_option("Size", "S"),
///     ],
/// );
///
/// let map = get_availability_map(
///     &product,
///     &[SelectedOption::new("Color", "Red")],
///     &AvailabilityOptions::default(),
/// );
/// let sizes: Vec<&str> = map["Size"].iter().map(String::as_str).collect();
/// assert_eq!(sizes, ["L", "S"]);
/// ```
pub fn get_availability_map<V: VariantLike>(
    product: &Product<V>,
    partial_selection: &[SelectedOption],
    options: &AvailabilityOptions,
) -> AvailabilityMap {
    let settings = options.normalize.then_some(&options.normalize_options);
    let search = maybe_normalize(partial_selection, settings);

    let mut map = AvailabilityMap::new();
    let mut considered = 0usize;

    for variant in product.variants() {
        if options.only_available && !variant.available_for_sale() {
            continue;
        }
        let variant_options = maybe_normalize(variant.selected_options(), settings);
        if !search.is_empty() && !matches_selection(&search, &variant_options) {
            continue;
        }

        considered += 1;
        for option in variant_options.iter() {
            map.entry(option.name.clone())
                .or_default()
                .insert(option.value.clone());
        }
    }

    tracing::trace!(
        selected = search.len(),
        variants = considered,
        options = map.len(),
        "computed availability map"
    );

    map
}

/// Whether `selected_options` is a complete selection that resolves to a
/// variant. Strict matching, availability not considered.
pub fn is_selection_valid<V: VariantLike>(
    product: &Product<V>,
    selected_options: &[SelectedOption],
) -> bool {
    find_variant(product, selected_options, &FindVariantOptions::default()).found()
}

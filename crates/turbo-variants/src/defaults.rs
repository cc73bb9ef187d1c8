//! Default variant policies.

use crate::error::VariantsError;
use crate::types::{Product, VariantLike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use turbo_urlstate::number::parse_leading_float;

/// How to pre-select a variant when a product page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultVariantPolicy {
    /// First variant in catalog order that is available for sale.
    #[default]
    FirstAvailable,
    /// Cheapest variant that is available for sale.
    CheapestAvailable,
    /// First variant regardless of availability.
    First,
    /// Cheapest variant regardless of availability.
    Cheapest,
}

impl DefaultVariantPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultVariantPolicy::FirstAvailable => "first-available",
            DefaultVariantPolicy::CheapestAvailable => "cheapest-available",
            DefaultVariantPolicy::First => "first",
            DefaultVariantPolicy::Cheapest => "cheapest",
        }
    }
}

impl fmt::Display for DefaultVariantPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultVariantPolicy {
    type Err = VariantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-available" => Ok(DefaultVariantPolicy::FirstAvailable),
            "cheapest-available" => Ok(DefaultVariantPolicy::CheapestAvailable),
            "first" => Ok(DefaultVariantPolicy::First),
            "cheapest" => Ok(DefaultVariantPolicy::Cheapest),
            other => Err(VariantsError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Pick the default variant for `product` under `policy`.
///
/// Returns `None` for an empty catalog, or when an `*-available` policy finds
/// nothing for sale. Cheapest ties go to the earlier variant; a price that
/// does not parse never wins against one already chosen.
///
/// ```rust
/// use turbo_variants::prelude::*;
///
/// let product = Product::new(
///     ["Size"],
///     vec![
///         Variant::new("s", Price::new("30.00", "USD")).with_option("Size", "S"),
///         Variant::new("m", Price::new("10.00", "USD")).with_option("Size", "M").with_availability(false),
///         Variant::new("l", Price::new("20.00", "USD")).with_option("Size", "L"),
///     ],
/// );
///
/// let cheapest = pick_default_variant(&product, DefaultVariantPolicy::CheapestAvailable);
/// assert_eq!(cheapest.map(|v| v.id.as_str()), Some("l"));
/// ```
pub fn pick_default_variant<V: VariantLike>(
    product: &Product<V>,
    policy: DefaultVariantPolicy,
) -> Option<&V> {
    let variants = product.variants();

    match policy {
        DefaultVariantPolicy::FirstAvailable => variants.iter().find(|v| v.available_for_sale()),
        DefaultVariantPolicy::CheapestAvailable => {
            cheapest(variants.iter().filter(|v| v.available_for_sale()))
        }
        DefaultVariantPolicy::First => variants.first(),
        DefaultVariantPolicy::Cheapest => cheapest(variants.iter()),
    }
}

/// Like [`pick_default_variant`], with the policy given by name (as stored
/// in config). Unknown names fall back to the first variant.
pub fn pick_default_variant_named<'a, V: VariantLike>(
    product: &'a Product<V>,
    policy: &str,
) -> Option<&'a V> {
    match policy.parse::<DefaultVariantPolicy>() {
        Ok(policy) => pick_default_variant(product, policy),
        Err(err) => {
            tracing::debug!(%err, "falling back to first variant");
            product.variants().first()
        }
    }
}

fn cheapest<'a, V: VariantLike + 'a>(mut variants: impl Iterator<Item = &'a V>) -> Option<&'a V> {
    let first = variants.next()?;
    let (winner, _) = variants.fold(
        (first, parse_leading_float(first.price_amount())),
        |(best, best_price), candidate| {
            let price = parse_leading_float(candidate.price_amount());
            if price < best_price {
                (candidate, price)
            } else {
                (best, best_price)
            }
        },
    );
    Some(winner)
}

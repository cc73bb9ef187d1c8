//! Variant shape used by the selection engine.

use crate::types::SelectedOption;
use serde::{Deserialize, Serialize};

/// What the engine needs to know about a variant.
///
/// Implement this for your own catalog type to run the engine on it
/// directly; results borrow from your values.
pub trait VariantLike {
    /// Variant identifier.
    fn id(&self) -> &str;

    /// Whether the variant can be bought right now.
    fn available_for_sale(&self) -> bool;

    /// The option values that define this variant.
    fn selected_options(&self) -> &[SelectedOption];

    /// Price as a decimal string (e.g., "29.99").
    fn price_amount(&self) -> &str;
}

/// Variant price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Decimal amount (e.g., "29.99").
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Price {
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }
}

/// Variant image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A purchasable variant, shaped like a Storefront API variant node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique variant identifier.
    pub id: String,
    /// Variant title (e.g., "Red / Large").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub available_for_sale: bool,
    /// Options that define this variant.
    pub selected_options: Vec<SelectedOption>,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Variant {
    /// Create a variant with no options.
    pub fn new(id: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            title: None,
            available_for_sale: true,
            selected_options: Vec::new(),
            price,
            image: None,
        }
    }

    /// Add an option to this variant.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.selected_options.push(SelectedOption::new(name, value));
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available_for_sale = available;
        self
    }
}

impl VariantLike for Variant {
    fn id(&self) -> &str {
        &self.id
    }

    fn available_for_sale(&self) -> bool {
        self.available_for_sale
    }

    fn selected_options(&self) -> &[SelectedOption] {
        &self.selected_options
    }

    fn price_amount(&self) -> &str {
        &self.price.amount
    }
}

//! Product shape: option axes plus the variant catalog.

use crate::error::VariantsError;
use crate::types::{Variant, VariantLike};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One value of a product option (e.g., "Red" for Color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    pub name: String,
}

/// A product option axis (e.g., Color, Size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option name (e.g., "Color").
    pub name: String,
    /// Values offered on this axis. Not used for matching.
    #[serde(default)]
    pub option_values: Vec<OptionValue>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            option_values: Vec::new(),
        }
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option_values = values
            .into_iter()
            .map(|v| OptionValue { name: v.into() })
            .collect();
        self
    }
}

/// Variant list wrapper (`variants { nodes }` in the Storefront API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConnection<V = Variant> {
    pub nodes: Vec<V>,
}

impl<V> Default for VariantConnection<V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// A product with its option axes and variants, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product<V = Variant> {
    #[serde(default)]
    pub options: Vec<ProductOption>,
    pub variants: VariantConnection<V>,
}

impl<V> Product<V> {
    /// Create a product from option names and variants.
    pub fn new<I, S>(option_names: I, variants: Vec<V>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: option_names.into_iter().map(ProductOption::new).collect(),
            variants: VariantConnection { nodes: variants },
        }
    }

    /// Variants in catalog order.
    pub fn variants(&self) -> &[V] {
        &self.variants.nodes
    }

    /// Option axis names in declaration order.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }

    /// Check whether the product declares an option axis.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|o| o.name == name)
    }
}

impl<V: VariantLike> Product<V> {
    /// Look up a variant by id.
    pub fn variant_by_id(&self, id: &str) -> Option<&V> {
        self.variants.nodes.iter().find(|v| v.id() == id)
    }
}

impl<V: DeserializeOwned> Product<V> {
    /// Load a product from Storefront-API-shaped JSON.
    pub fn from_json_str(input: &str) -> Result<Self, VariantsError> {
        Ok(serde_json::from_str(input)?)
    }
}

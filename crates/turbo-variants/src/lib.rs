//! Product variant selection for TurboCommerce storefronts.
//!
//! Turns a shopper's option choices into a concrete variant:
//!
//! - **Find**: resolve a selection to a variant, or say why not
//! - **Availability**: which option values can still lead to a variant
//! - **Defaults**: pre-select a variant by policy
//! - **URL**: read and write the selection as query params
//!
//! Matching is strict unless normalization is requested. The engine is generic
//! over [`VariantLike`], so your own catalog types work without conversion.
//!
//! # Example
//!
//! ```rust
//! use turbo_variants::prelude::*;
//! use turbo_urlstate::SearchParams;
//!
//! let product = Product::new(
//!     ["Color", "Size"],
//!     vec![
//!         Variant::new("1", Price::new("25.00", "USD")).with_option("Color", "Red").with_option("Size", "M"),
//!         Variant::new("2", Price::new("25.00", "USD")).with_option("Color", "Blue").with_option("Size", "M"),
//!     ],
//! );
//!
//! let params = SearchParams::parse("?Color=Blue&Size=M");
//! let selected = get_selected_options_from_url(&params, Some(&["Color", "Size"]));
//!
//! let result = find_variant(&product, &selected, &FindVariantOptions::default());
//! assert_eq!(result.variant().map(|v| v.id.as_str()), Some("2"));
//!
//! let fallback = pick_default_variant(&product, DefaultVariantPolicy::FirstAvailable);
//! assert_eq!(fallback.map(|v| v.id.as_str()), Some("1"));
//! ```

pub mod availability;
pub mod defaults;
pub mod error;
pub mod find;
pub mod normalize;
pub mod types;
pub mod url;

pub use availability::{get_availability_map, is_selection_valid, AvailabilityMap, AvailabilityOptions};
pub use defaults::{pick_default_variant, pick_default_variant_named, DefaultVariantPolicy};
pub use error::VariantsError;
pub use find::{find_variant, FindVariantOptions, FindVariantReason, FindVariantResult};
pub use normalize::{normalize_selected_options, Casing, NormalizeOptions};
pub use types::{
    Image, OptionValue, Price, Product, ProductOption, SelectedOption, Variant, VariantConnection,
    VariantLike,
};
pub use url::{
    get_selected_options_from_url, selected_options_to_url_params, OptionSource, RecordValue,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::VariantsError;
    pub use crate::types::{
        Image, OptionValue, Price, Product, ProductOption, SelectedOption, Variant,
        VariantConnection, VariantLike,
    };

    // Engine
    pub use crate::availability::{
        get_availability_map, is_selection_valid, AvailabilityMap, AvailabilityOptions,
    };
    pub use crate::defaults::{pick_default_variant, pick_default_variant_named, DefaultVariantPolicy};
    pub use crate::find::{find_variant, FindVariantOptions, FindVariantReason, FindVariantResult};
    pub use crate::normalize::{normalize_selected_options, Casing, NormalizeOptions};

    // URL adapters
    pub use crate::url::{
        get_selected_options_from_url, selected_options_to_url_params, OptionSource, RecordValue,
    };
}

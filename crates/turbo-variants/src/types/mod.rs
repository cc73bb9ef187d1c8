//! Product, variant and selection types.

mod product;
mod selected_option;
mod variant;

pub use product::{OptionValue, Product, ProductOption, VariantConnection};
pub use selected_option::SelectedOption;
pub use variant::{Image, Price, Variant, VariantLike};

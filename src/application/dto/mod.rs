pub mod display;
pub mod products;
pub mod redirect;
pub mod vendors;

pub use products::{ProductDto, ProductEditView, ProductView};
pub use redirect::Redirect;
pub use vendors::{VendorDto, VendorEditView, VendorPageView, VendorSummaryDto};

use serde::Serialize;
use utoipa::ToSchema;

/// One entry of a `<select>`: stored value plus human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: display::humanize_label(value),
            selected,
        }
    }
}

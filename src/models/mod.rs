mod derived_view;
mod quote;

pub use derived_view::{SortDirection, SortKey, derive_view};
pub use quote::Quote;

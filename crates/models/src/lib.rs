//! Catalog entities and the validation rules every stored product satisfies.

pub mod errors;
pub mod product;

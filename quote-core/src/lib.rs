pub mod calculations;
pub mod models;
pub mod quote_number;

pub use calculations::compute_quote;
pub use models::*;
pub use quote_number::quote_number;

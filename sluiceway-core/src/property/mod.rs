mod data_size;
mod error;
mod expression;
#[cfg(test)]
mod tests;

pub use data_size::parse_data_size;
pub use error::PropertyError;
pub use expression::{AttributeExpression, parse_bool_token};

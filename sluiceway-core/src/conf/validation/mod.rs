mod validate;
mod validation_ctx;

pub use validate::validate;
pub use validation_ctx::{ValidationCtx, ValidationErrors};

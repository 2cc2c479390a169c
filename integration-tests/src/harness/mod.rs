mod data;
pub mod runner;

pub use data::{FOOTER, HEADER, reference_input};
pub use runner::TestRunner;

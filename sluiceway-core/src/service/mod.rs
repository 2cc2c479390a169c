mod key_provider;
#[cfg(test)]
mod tests;

pub use key_provider::{KeyProvider, StaticKeyProvider};

pub mod trim_bytes;

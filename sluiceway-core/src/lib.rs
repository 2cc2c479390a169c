pub mod conf;
pub mod flow;
pub mod logging;
pub mod processor;
pub mod property;
pub mod service;

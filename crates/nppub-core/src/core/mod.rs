pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod logger;
pub(crate) mod options;
pub(crate) mod tooling;

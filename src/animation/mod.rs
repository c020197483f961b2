pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod schedule;
pub(crate) mod sink;
pub(crate) mod trace;

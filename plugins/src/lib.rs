pub mod client;
pub mod factory;
pub mod probes;

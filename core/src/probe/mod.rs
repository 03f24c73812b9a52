pub mod r#trait;

pub use r#trait::Probe;

mod load;
mod resolver;

pub use load::file_defaults;
pub use resolver::{layered, resolve, snapshot_env, usage, EnvMap, InputSpec};

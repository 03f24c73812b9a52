pub mod api;
pub mod field;
pub mod function;
pub mod invoke;
pub mod secret;

pub use api::{ApiExistsProbe, IntegrationProbe, RouteProbe, StageProbe};
pub use field::FieldProbe;
pub use function::FunctionExistsProbe;
pub use invoke::LiveInvokeProbe;
pub use secret::SecretExistsProbe;

use serde_json::Value;

/// Render a scalar JSON leaf as the string the comparison policies operate
/// on. Objects and arrays are never comparable values.
pub(crate) fn scalar_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

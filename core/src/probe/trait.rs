// core/src/probe/trait.rs
use async_trait::async_trait;

use crate::client::CloudClient;
use crate::outcome::ProbeOutcome;

/// One atomic check comparing an observed external value against an expected
/// value. Probes are infallible from the executor's point of view: an
/// erroring external call is converted into a Fail outcome inside the probe,
/// never propagated.
#[async_trait]
pub trait Probe: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome;
}

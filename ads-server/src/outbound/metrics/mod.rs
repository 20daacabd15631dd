use crate::domain::ports::AdMetrics;

#[derive(Debug, Clone)]
pub struct NullMetrics;

impl AdMetrics for NullMetrics {
    async fn record_ad_creation_success(&self) {}

    async fn record_ad_creation_failure(&self) {}
}

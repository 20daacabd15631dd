/*!
   Module `service` provides the canonical implementation of the [AdService] port.
*/

use super::{
    models::{Advertisement, CreateAdError, CreateAdRequest, GetAdError},
    ports::{AdMetrics, AdRepository, AdService},
};

/// Canonical implementation of the [AdService] port, through which the advertising domain API
/// is consumed.
#[derive(Debug, Clone)]
pub struct Service<R, M>
where
    R: AdRepository,
    M: AdMetrics,
{
    repository: R,
    metrics: M,
}

impl<R, M> Service<R, M>
where
    R: AdRepository,
    M: AdMetrics,
{
    pub fn new(repo: R, metrics: M) -> Self {
        Self {
            repository: repo,
            metrics,
        }
    }
}

impl<R, M> AdService for Service<R, M>
where
    R: AdRepository,
    M: AdMetrics,
{
    /// Create the [Advertisement] specified in `req`.
    ///
    /// # Errors
    ///
    /// - Propagates any [CreateAdError] returned by the [AdRepository].
    async fn create_ad(&self, req: &CreateAdRequest) -> Result<Advertisement, CreateAdError> {
        let result = self.repository.persist_ad(req).await;

        match result {
            Ok(_) => self.metrics.record_ad_creation_success().await,
            Err(_) => self.metrics.record_ad_creation_failure().await,
        }

        result
    }

    async fn random_ad(&self) -> Result<Option<Advertisement>, GetAdError> {
        self.repository.sample_ad().await
    }
}

/*
   Module `ports` specifies the API by which external modules interact with the advertising
   domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::models::*;

/// `AdService` is the public API for the advertising domain.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait AdService: Clone + Send + Sync + 'static {
    /// Asynchronously create a new [Advertisement].
    ///
    /// # Errors
    ///
    /// - [CreateAdError::Unknown] if the underlying store rejects the insert.
    fn create_ad(
        &self,
        req: &CreateAdRequest,
    ) -> impl Future<Output = Result<Advertisement, CreateAdError>> + Send;

    /// Asynchronously fetch one [Advertisement] sampled uniformly at random, or `None` when
    /// no advertisements are stored.
    fn random_ad(&self) -> impl Future<Output = Result<Option<Advertisement>, GetAdError>> + Send;
}

/// `AdRepository` represents a store of the created advertisements.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait AdRepository: Send + Sync + Clone + 'static {
    /// Asynchronously persist a new [Advertisement].
    fn persist_ad(
        &self,
        req: &CreateAdRequest,
    ) -> impl Future<Output = Result<Advertisement, CreateAdError>> + Send;

    /// Asynchronously draw one stored [Advertisement] uniformly at random.
    fn sample_ad(&self) -> impl Future<Output = Result<Option<Advertisement>, GetAdError>> + Send;
}

/// `AdMetrics` describes an aggregator of advertisement creation related metrics, such as a
/// time-series database.
pub trait AdMetrics: Send + Sync + Clone + 'static {
    /// Record a successful advertisement creation.
    fn record_ad_creation_success(&self) -> impl Future<Output = ()> + Send;

    /// Record an advertisement creation failure.
    fn record_ad_creation_failure(&self) -> impl Future<Output = ()> + Send;
}

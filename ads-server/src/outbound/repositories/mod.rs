#[cfg(test)]
use std::sync::{Arc, Mutex};

use anyhow::{Context, anyhow};
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc},
};
#[cfg(test)]
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::domain::{
    models::{AdLink, AdName, Advertisement, CreateAdError, CreateAdRequest, GetAdError},
    ports::AdRepository,
};

const ADS_COLLECTION: &str = "ads";

/// Startup failure while establishing the document store connection. Fatal, never retried.
#[derive(Debug, Error)]
#[error("failed to connect to document store at {db_host}")]
pub struct ConnectionError {
    db_host: String,
    #[source]
    source: mongodb::error::Error,
}

/// Handle to the `ads` collection of the configured database.
///
/// Cloning shares the underlying client. [MongoAdStore::close] releases the connection for
/// every clone; operations issued through a clone after that point fail.
#[derive(Debug, Clone)]
pub struct MongoAdStore {
    client: Client,
    ads: Collection<Document>,
}

impl MongoAdStore {
    /// Connect to the store at `db_host` and select the `ads` collection of `db_name`.
    ///
    /// The driver dials lazily, so a `ping` is issued here to surface an unreachable or
    /// unauthenticated target during startup.
    pub async fn connect(db_host: &str, db_name: &str) -> Result<Self, ConnectionError> {
        let connection_failed = |source| ConnectionError {
            db_host: db_host.to_string(),
            source,
        };

        let client = Client::with_uri_str(db_host).await.map_err(connection_failed)?;

        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(connection_failed)?;

        let ads = database.collection::<Document>(ADS_COLLECTION);

        Ok(Self { client, ads })
    }

    /// Release the underlying connection.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

impl AdRepository for MongoAdStore {
    async fn persist_ad(&self, req: &CreateAdRequest) -> Result<Advertisement, CreateAdError> {
        let document = doc! {
            "name": req.name().as_str(),
            "link": req.link().as_str(),
        };

        self.ads
            .insert_one(document, None)
            .await
            .map_err(|e| anyhow!(e).context("failed to insert advertisement"))?;

        Ok(Advertisement::new(req.name().clone(), req.link().clone()))
    }

    async fn sample_ad(&self) -> Result<Option<Advertisement>, GetAdError> {
        // One uniform sample with the store-assigned identifier projected out.
        let pipeline = [
            doc! { "$sample": { "size": 1 } },
            doc! { "$project": { "_id": 0 } },
        ];

        let mut cursor = self
            .ads
            .aggregate(pipeline, None)
            .await
            .map_err(|e| anyhow!(e).context("failed to sample advertisements"))?;

        let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| anyhow!(e).context("failed to read sampled advertisement"))?
        else {
            return Ok(None);
        };

        advertisement_from_document(&document)
            .map(Some)
            .map_err(GetAdError::Unknown)
    }
}

fn advertisement_from_document(document: &Document) -> anyhow::Result<Advertisement> {
    let name = document
        .get_str("name")
        .context("stored advertisement is missing its name")?;
    let link = document
        .get_str("link")
        .context("stored advertisement is missing its link")?;

    let name = AdName::new(name).context("stored advertisement has an empty name")?;
    let link = AdLink::new(link).context("stored advertisement has an empty link")?;

    Ok(Advertisement::new(name, link))
}

/// In-memory counterpart of [MongoAdStore], standing in for the document store in tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdStore {
    ads: Arc<Mutex<Vec<Advertisement>>>,
}

#[cfg(test)]
impl InMemoryAdStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl AdRepository for InMemoryAdStore {
    async fn persist_ad(&self, req: &CreateAdRequest) -> Result<Advertisement, CreateAdError> {
        let ad = Advertisement::new(req.name().clone(), req.link().clone());

        self.ads
            .lock()
            .map_err(|_| CreateAdError::Unknown(anyhow!("advertisement store poisoned")))?
            .push(ad.clone());

        Ok(ad)
    }

    async fn sample_ad(&self) -> Result<Option<Advertisement>, GetAdError> {
        let ads = self
            .ads
            .lock()
            .map_err(|_| GetAdError::Unknown(anyhow!("advertisement store poisoned")))?;

        Ok(ads.choose(&mut rand::rng()).cloned())
    }
}

use derive_more::From;
use thiserror::Error;

/// A promotional record delivered to clients.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Advertisement {
    name: AdName,
    link: AdLink,
}

impl Advertisement {
    pub fn new(name: AdName, link: AdLink) -> Self {
        Self { name, link }
    }

    pub fn name(&self) -> &AdName {
        &self.name
    }

    pub fn link(&self) -> &AdLink {
        &self.link
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdName(String);

#[derive(Clone, Debug, Error)]
#[error("advertisement name cannot be empty")]
pub struct AdNameEmptyError;

impl AdName {
    pub fn new(raw: &str) -> Result<Self, AdNameEmptyError> {
        if raw.is_empty() {
            return Err(AdNameEmptyError);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdLink(String);

#[derive(Clone, Debug, Error)]
#[error("advertisement link cannot be empty")]
pub struct AdLinkEmptyError;

impl AdLink {
    pub fn new(raw: &str) -> Result<Self, AdLinkEmptyError> {
        if raw.is_empty() {
            return Err(AdLinkEmptyError);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The fields required by the domain to create an [Advertisement].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct CreateAdRequest {
    name: AdName,
    link: AdLink,
}

impl CreateAdRequest {
    pub fn new(name: AdName, link: AdLink) -> Self {
        Self { name, link }
    }

    pub fn name(&self) -> &AdName {
        &self.name
    }

    pub fn link(&self) -> &AdLink {
        &self.link
    }
}

#[derive(Debug, Error)]
pub enum CreateAdError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
    // to be extended as new error scenarios are introduced
}

#[derive(Debug, Error)]
pub enum GetAdError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ad_name_rejects_empty() {
        assert!(AdName::new("").is_err());
    }

    #[test]
    fn test_ad_name_accepts_text() {
        let name = AdName::new("Acme").unwrap();
        assert_eq!(name.as_str(), "Acme");
    }

    #[test]
    fn test_ad_name_accepts_whitespace() {
        // Presence checks only: whitespace is a value, matching the original
        // service's falsy-field validation.
        assert!(AdName::new(" ").is_ok());
    }

    #[test]
    fn test_ad_link_rejects_empty() {
        assert!(AdLink::new("").is_err());
    }

    #[test]
    fn test_ad_link_accepts_text() {
        let link = AdLink::new("http://acme.test").unwrap();
        assert_eq!(link.as_str(), "http://acme.test");
    }

    #[test]
    fn test_create_ad_request_exposes_fields() {
        let req = CreateAdRequest::new(
            AdName::new("Acme").unwrap(),
            AdLink::new("http://acme.test").unwrap(),
        );

        assert_eq!(req.name().as_str(), "Acme");
        assert_eq!(req.link().as_str(), "http://acme.test");
    }
}

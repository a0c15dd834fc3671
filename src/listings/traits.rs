use crate::models::{Property, PropertyType};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can hand out rental listings.
/// Today only the mock catalog implements it.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every listing the source knows about
    async fn fetch_all(&self) -> Result<Vec<Property>>;

    /// Listings of a single kind
    async fn fetch_kind(&self, kind: PropertyType) -> Result<Vec<Property>> {
        let all = self.fetch_all().await?;
        Ok(all.into_iter().filter(|p| p.kind == kind).collect())
    }

    /// Look up one listing, used when opening the edit form
    async fn find(&self, id: &str) -> Result<Option<Property>> {
        let all = self.fetch_all().await?;
        Ok(all.into_iter().find(|p| p.id == id))
    }

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

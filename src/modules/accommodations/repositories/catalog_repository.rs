use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::accommodations::models::Accommodation;

/// Read access to listed accommodations
#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    /// All accommodations in listing order
    async fn list(&self) -> Result<Vec<Accommodation>>;

    /// Find accommodation by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Accommodation>>;
}

/// Accommodations read from a JSON catalog file (an array of accommodations)
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AccommodationRepository for JsonCatalogRepository {
    async fn list(&self) -> Result<Vec<Accommodation>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let accommodations = parse_catalog(&raw)?;

        info!(
            path = %self.path.display(),
            count = accommodations.len(),
            "Loaded accommodation catalog"
        );

        Ok(accommodations)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Accommodation>> {
        Ok(self.list().await?.into_iter().find(|acc| acc.id == id))
    }
}

/// Parse and validate a catalog document.
///
/// Every accommodation and every linked discount record is checked here, so
/// a bad percentage or inverted window is reported at load time.
pub fn parse_catalog(raw: &str) -> Result<Vec<Accommodation>> {
    let accommodations: Vec<Accommodation> = serde_json::from_str(raw)?;

    for accommodation in &accommodations {
        accommodation.validate()?;

        if let Some(record) = &accommodation.festival_discount {
            record.to_definition().map_err(|e| {
                AppError::validation(format!(
                    "Accommodation {} has an invalid festival discount: {}",
                    accommodation.id, e
                ))
            })?;
        }
    }

    let mut ids: Vec<i64> = accommodations.iter().map(|acc| acc.id).collect();
    ids.sort_unstable();
    if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(AppError::validation(format!(
            "Duplicate accommodation id {} in catalog",
            pair[0]
        )));
    }

    Ok(accommodations)
}

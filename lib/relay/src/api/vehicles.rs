//! Vehicle catalog integration (manufacturers and their main types).
//!
//! The upstream API paginates with a `page`/`pageSize`/`totalPageCount`
//! envelope (0-based pages) and delivers the payload as a free-form
//! id -> name dictionary under `wkda`, which is reshaped client-side into a
//! list sorted by name.

use std::collections::HashMap;

use serde::Deserialize;

use relay_core::{ApiRequest, AppError, PagedResult};

use crate::client::RestClient;

const MANUFACTURERS_PATH: &str = "/car-types/manufacturer";
const MAIN_TYPES_PATH: &str = "/car-types/main-types";

/// Vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Main vehicle type of a manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleType {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// `page`/`pageSize`/`totalPageCount` envelope with a dictionary payload.
#[derive(Debug, Clone, Deserialize)]
struct SliceEnvelope {
    page: usize,
    #[serde(rename = "totalPageCount")]
    total_page_count: usize,
    wkda: HashMap<String, String>,
}

/// Reshape the dictionary payload into entities sorted by name.
fn reshape<T>(wkda: HashMap<String, String>, make: impl Fn(String, String) -> T) -> Vec<T> {
    let mut entries: Vec<(String, String)> = wkda.into_iter().collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .map(|(id, name)| make(id, name))
        .collect()
}

/// Repository-style accessor over the vehicle catalog API.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    client: RestClient,
}

impl VehicleRepository {
    /// Create a repository over the given client.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch one page of manufacturers.
    pub async fn fetch_manufacturers(
        &self,
        page: usize,
        page_size: usize,
    ) -> std::result::Result<PagedResult<Manufacturer>, AppError> {
        let request = ApiRequest::get(MANUFACTURERS_PATH)
            .query("page", page.to_string())
            .query("pageSize", page_size.to_string())
            .build();

        let envelope: SliceEnvelope = self.client.send(request).await?;

        let items = reshape(envelope.wkda, |id, name| Manufacturer { id, name });
        Ok(PagedResult::new(items, envelope.page, envelope.total_page_count))
    }

    /// Fetch one page of a manufacturer's main types.
    pub async fn fetch_main_types(
        &self,
        manufacturer_id: &str,
        page: usize,
        page_size: usize,
    ) -> std::result::Result<PagedResult<VehicleType>, AppError> {
        let request = ApiRequest::get(MAIN_TYPES_PATH)
            .query("manufacturer", manufacturer_id)
            .query("page", page.to_string())
            .query("pageSize", page_size.to_string())
            .build();

        let envelope: SliceEnvelope = self.client.send(request).await?;

        let items = reshape(envelope.wkda, |id, name| VehicleType { id, name });
        Ok(PagedResult::new(items, envelope.page, envelope.total_page_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_sorts_by_name() {
        let wkda = HashMap::from([
            ("VW".to_string(), "Volkswagen".to_string()),
            ("AUD".to_string(), "Audi".to_string()),
            ("BMW".to_string(), "BMW".to_string()),
        ]);

        let manufacturers = reshape(wkda, |id, name| Manufacturer { id, name });

        let names: Vec<&str> = manufacturers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Audi", "BMW", "Volkswagen"]);
    }

    #[test]
    fn reshape_breaks_name_ties_by_id() {
        let wkda = HashMap::from([
            ("B".to_string(), "Same".to_string()),
            ("A".to_string(), "Same".to_string()),
        ]);

        let types = reshape(wkda, |id, name| VehicleType { id, name });

        let ids: Vec<&str> = types.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn envelope_deserializes_wire_shape() {
        let body = r#"{
            "page": 1,
            "pageSize": 15,
            "totalPageCount": 5,
            "wkda": {"VW": "Volkswagen", "AUD": "Audi"}
        }"#;

        let envelope: SliceEnvelope = serde_json::from_str(body).expect("deserialize");

        assert_eq!(envelope.page, 1);
        assert_eq!(envelope.total_page_count, 5);
        assert_eq!(envelope.wkda.len(), 2);
    }
}

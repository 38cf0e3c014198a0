// Impact method endpoints

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{ImpactMethod, ImpactMethodInput, Perspective};

impl CatalogClient {
    /// `GET /api/impact-methods` -- server-paginated, keyword-aware.
    pub async fn list_impact_methods(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<ImpactMethod>, Error> {
        self.get_with_params("impact-methods", &page_params(page, page_size, keyword))
            .await
    }

    /// `GET /api/impact-methods/{id}`
    pub async fn get_impact_method(&self, id: Uuid) -> Result<ImpactMethod, Error> {
        let id = require_id(id)?;
        self.get(&format!("impact-methods/{id}")).await
    }

    /// `POST /api/impact-methods`
    pub async fn create_impact_method(
        &self,
        input: &ImpactMethodInput,
    ) -> Result<ImpactMethod, Error> {
        self.post("impact-methods", input).await
    }

    /// `PUT /api/impact-methods/{id}`
    pub async fn update_impact_method(
        &self,
        id: Uuid,
        input: &ImpactMethodInput,
    ) -> Result<ImpactMethod, Error> {
        let id = require_id(id)?;
        self.put(&format!("impact-methods/{id}"), input).await
    }

    /// `DELETE /api/impact-methods/{id}`
    pub async fn delete_impact_method(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("impact-methods/{id}")).await
    }

    /// `GET /api/perspectives` -- the fixed set of LCIA perspectives
    /// selectable when creating a method.
    pub async fn list_perspectives(&self) -> Result<Vec<Perspective>, Error> {
        self.get("perspectives").await
    }
}

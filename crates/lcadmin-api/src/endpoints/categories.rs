// Impact and midpoint category endpoints
//
// Impact categories have two scoped list routes besides the flat one;
// which route to call for a given scope filter is decided by the core
// facade (the backends differ, it is not a client-side filter).

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{ImpactCategory, ImpactCategoryInput, MidpointCategory, MidpointCategoryInput};

impl CatalogClient {
    // ── Impact categories ────────────────────────────────────────────

    /// `GET /api/impact-categories` -- unscoped, server-paginated.
    pub async fn list_impact_categories(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<ImpactCategory>, Error> {
        self.get_with_params("impact-categories", &page_params(page, page_size, keyword))
            .await
    }

    /// `GET /api/impact-methods/{id}/impact-categories` -- categories
    /// belonging to one method.
    pub async fn list_impact_categories_by_method(
        &self,
        method_id: Uuid,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<ImpactCategory>, Error> {
        let method_id = require_id(method_id)?;
        self.get_with_params(
            &format!("impact-methods/{method_id}/impact-categories"),
            &page_params(page, page_size, keyword),
        )
        .await
    }

    /// `GET /api/emission-compartments/{id}/impact-categories` --
    /// categories whose indicator tracks one compartment.
    pub async fn list_impact_categories_by_compartment(
        &self,
        compartment_id: Uuid,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<ImpactCategory>, Error> {
        let compartment_id = require_id(compartment_id)?;
        self.get_with_params(
            &format!("emission-compartments/{compartment_id}/impact-categories"),
            &page_params(page, page_size, keyword),
        )
        .await
    }

    /// `GET /api/impact-categories/{id}`
    pub async fn get_impact_category(&self, id: Uuid) -> Result<ImpactCategory, Error> {
        let id = require_id(id)?;
        self.get(&format!("impact-categories/{id}")).await
    }

    /// `POST /api/impact-categories`
    pub async fn create_impact_category(
        &self,
        input: &ImpactCategoryInput,
    ) -> Result<ImpactCategory, Error> {
        self.post("impact-categories", input).await
    }

    /// `PUT /api/impact-categories/{id}`
    pub async fn update_impact_category(
        &self,
        id: Uuid,
        input: &ImpactCategoryInput,
    ) -> Result<ImpactCategory, Error> {
        let id = require_id(id)?;
        self.put(&format!("impact-categories/{id}"), input).await
    }

    /// `DELETE /api/impact-categories/{id}`
    pub async fn delete_impact_category(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("impact-categories/{id}")).await
    }

    // ── Midpoint categories ──────────────────────────────────────────
    //
    // The midpoint list endpoint returns the full set (there are a few
    // dozen at most); pagination and keyword filtering happen client
    // side in lcadmin-core.

    /// `GET /api/midpoint-categories` -- full list, unpaginated.
    pub async fn list_midpoint_categories(&self) -> Result<Vec<MidpointCategory>, Error> {
        self.get("midpoint-categories").await
    }

    /// `GET /api/midpoint-categories/{id}`
    pub async fn get_midpoint_category(&self, id: Uuid) -> Result<MidpointCategory, Error> {
        let id = require_id(id)?;
        self.get(&format!("midpoint-categories/{id}")).await
    }

    /// `POST /api/midpoint-categories`
    pub async fn create_midpoint_category(
        &self,
        input: &MidpointCategoryInput,
    ) -> Result<MidpointCategory, Error> {
        self.post("midpoint-categories", input).await
    }

    /// `PUT /api/midpoint-categories/{id}`
    pub async fn update_midpoint_category(
        &self,
        id: Uuid,
        input: &MidpointCategoryInput,
    ) -> Result<MidpointCategory, Error> {
        let id = require_id(id)?;
        self.put(&format!("midpoint-categories/{id}"), input).await
    }

    /// `DELETE /api/midpoint-categories/{id}`
    pub async fn delete_midpoint_category(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("midpoint-categories/{id}")).await
    }
}

// Unit and unit-group endpoints

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{Unit, UnitGroup, UnitGroupInput, UnitInput};

impl CatalogClient {
    // ── Units ────────────────────────────────────────────────────────

    /// `GET /api/units` -- unscoped, server-paginated.
    pub async fn list_units(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<Unit>, Error> {
        self.get_with_params("units", &page_params(page, page_size, keyword))
            .await
    }

    /// `GET /api/unit-groups/{id}/units` -- units of one group.
    pub async fn list_units_by_group(
        &self,
        group_id: Uuid,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<Unit>, Error> {
        let group_id = require_id(group_id)?;
        self.get_with_params(
            &format!("unit-groups/{group_id}/units"),
            &page_params(page, page_size, keyword),
        )
        .await
    }

    /// `GET /api/units/{id}`
    pub async fn get_unit(&self, id: Uuid) -> Result<Unit, Error> {
        let id = require_id(id)?;
        self.get(&format!("units/{id}")).await
    }

    /// `POST /api/units`
    pub async fn create_unit(&self, input: &UnitInput) -> Result<Unit, Error> {
        self.post("units", input).await
    }

    /// `PUT /api/units/{id}`
    pub async fn update_unit(&self, id: Uuid, input: &UnitInput) -> Result<Unit, Error> {
        let id = require_id(id)?;
        self.put(&format!("units/{id}"), input).await
    }

    /// `DELETE /api/units/{id}`
    pub async fn delete_unit(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("units/{id}")).await
    }

    // ── Unit groups ──────────────────────────────────────────────────
    //
    // The group list is small and unpaginated; lcadmin-core paginates
    // and keyword-filters it client side.

    /// `GET /api/unit-groups` -- full list, unpaginated.
    pub async fn list_unit_groups(&self) -> Result<Vec<UnitGroup>, Error> {
        self.get("unit-groups").await
    }

    /// `GET /api/unit-groups/{id}`
    pub async fn get_unit_group(&self, id: Uuid) -> Result<UnitGroup, Error> {
        let id = require_id(id)?;
        self.get(&format!("unit-groups/{id}")).await
    }

    /// `POST /api/unit-groups`
    pub async fn create_unit_group(&self, input: &UnitGroupInput) -> Result<UnitGroup, Error> {
        self.post("unit-groups", input).await
    }

    /// `PUT /api/unit-groups/{id}`
    pub async fn update_unit_group(
        &self,
        id: Uuid,
        input: &UnitGroupInput,
    ) -> Result<UnitGroup, Error> {
        let id = require_id(id)?;
        self.put(&format!("unit-groups/{id}"), input).await
    }

    /// `DELETE /api/unit-groups/{id}`
    pub async fn delete_unit_group(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("unit-groups/{id}")).await
    }
}

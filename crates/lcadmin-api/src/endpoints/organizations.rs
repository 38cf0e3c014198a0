// Organization endpoints

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{Organization, OrganizationInput};

impl CatalogClient {
    /// `GET /api/organizations` -- server-paginated, keyword-aware.
    pub async fn list_organizations(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<Organization>, Error> {
        self.get_with_params("organizations", &page_params(page, page_size, keyword))
            .await
    }

    /// `GET /api/organizations/{id}`
    pub async fn get_organization(&self, id: Uuid) -> Result<Organization, Error> {
        let id = require_id(id)?;
        self.get(&format!("organizations/{id}")).await
    }

    /// `POST /api/organizations`
    pub async fn create_organization(
        &self,
        input: &OrganizationInput,
    ) -> Result<Organization, Error> {
        self.post("organizations", input).await
    }

    /// `PUT /api/organizations/{id}`
    pub async fn update_organization(
        &self,
        id: Uuid,
        input: &OrganizationInput,
    ) -> Result<Organization, Error> {
        let id = require_id(id)?;
        self.put(&format!("organizations/{id}"), input).await
    }

    /// `DELETE /api/organizations/{id}`
    pub async fn delete_organization(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("organizations/{id}")).await
    }
}

// Industry code endpoints
//
// The list route paginates but takes no keyword parameter; keyword
// search over the loaded page is the core facade's fallback.

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{IndustryCode, IndustryCodeInput};

impl CatalogClient {
    /// `GET /api/industry-codes` -- server-paginated, no server keyword.
    pub async fn list_industry_codes(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<IndustryCode>, Error> {
        self.get_with_params("industry-codes", &page_params(page, page_size, None))
            .await
    }

    /// `GET /api/industry-codes/{id}`
    pub async fn get_industry_code(&self, id: Uuid) -> Result<IndustryCode, Error> {
        let id = require_id(id)?;
        self.get(&format!("industry-codes/{id}")).await
    }

    /// `POST /api/industry-codes`
    pub async fn create_industry_code(
        &self,
        input: &IndustryCodeInput,
    ) -> Result<IndustryCode, Error> {
        self.post("industry-codes", input).await
    }

    /// `PUT /api/industry-codes/{id}`
    pub async fn update_industry_code(
        &self,
        id: Uuid,
        input: &IndustryCodeInput,
    ) -> Result<IndustryCode, Error> {
        let id = require_id(id)?;
        self.put(&format!("industry-codes/{id}"), input).await
    }

    /// `DELETE /api/industry-codes/{id}`
    pub async fn delete_industry_code(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("industry-codes/{id}")).await
    }
}

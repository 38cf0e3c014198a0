// User administration endpoints

use uuid::Uuid;

use super::{page_params, require_id};
use crate::client::CatalogClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::types::{User, UserInput};

impl CatalogClient {
    /// `GET /api/users` -- server-paginated, keyword-aware.
    pub async fn list_users(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<User>, Error> {
        self.get_with_params("users", &page_params(page, page_size, keyword))
            .await
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, id: Uuid) -> Result<User, Error> {
        let id = require_id(id)?;
        self.get(&format!("users/{id}")).await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, input: &UserInput) -> Result<User, Error> {
        self.post("users", input).await
    }

    /// `PUT /api/users/{id}`
    pub async fn update_user(&self, id: Uuid, input: &UserInput) -> Result<User, Error> {
        let id = require_id(id)?;
        self.put(&format!("users/{id}"), input).await
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("users/{id}")).await
    }
}

// Emission compartment endpoints

use uuid::Uuid;

use super::require_id;
use crate::client::CatalogClient;
use crate::error::Error;
use crate::types::{EmissionCompartment, EmissionCompartmentInput};

impl CatalogClient {
    /// `GET /api/emission-compartments` -- full list, unpaginated.
    pub async fn list_emission_compartments(&self) -> Result<Vec<EmissionCompartment>, Error> {
        self.get("emission-compartments").await
    }

    /// `GET /api/emission-compartments/{id}`
    pub async fn get_emission_compartment(&self, id: Uuid) -> Result<EmissionCompartment, Error> {
        let id = require_id(id)?;
        self.get(&format!("emission-compartments/{id}")).await
    }

    /// `POST /api/emission-compartments`
    pub async fn create_emission_compartment(
        &self,
        input: &EmissionCompartmentInput,
    ) -> Result<EmissionCompartment, Error> {
        self.post("emission-compartments", input).await
    }

    /// `PUT /api/emission-compartments/{id}`
    pub async fn update_emission_compartment(
        &self,
        id: Uuid,
        input: &EmissionCompartmentInput,
    ) -> Result<EmissionCompartment, Error> {
        let id = require_id(id)?;
        self.put(&format!("emission-compartments/{id}"), input).await
    }

    /// `DELETE /api/emission-compartments/{id}`
    pub async fn delete_emission_compartment(&self, id: Uuid) -> Result<(), Error> {
        let id = require_id(id)?;
        self.delete(&format!("emission-compartments/{id}")).await
    }
}

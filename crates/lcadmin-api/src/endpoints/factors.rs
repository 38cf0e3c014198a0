// Emission factor bulk transfer
//
// Factors are only ever moved in bulk: the backend serves its reference
// table as an opaque binary file and accepts the same format back. The
// file format is backend-defined.

use crate::client::CatalogClient;
use crate::error::Error;
use crate::types::ImportSummary;

impl CatalogClient {
    /// `GET /api/emission-factors/export` -- the full reference-factor
    /// table as raw bytes.
    pub async fn export_emission_factors(&self) -> Result<Vec<u8>, Error> {
        self.get_bytes("emission-factors/export").await
    }

    /// `POST /api/emission-factors/import` -- upload a factor table as
    /// multipart form data.
    pub async fn import_emission_factors(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ImportSummary, Error> {
        let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart("emission-factors/import", form).await
    }
}

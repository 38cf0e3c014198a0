// Catalog endpoint modules
//
// Each entity family gets its own file of inherent methods on
// `CatalogClient`, keeping `client.rs` focused on transport mechanics.

pub mod categories;
pub mod compartments;
pub mod dashboard;
pub mod factors;
pub mod industry_codes;
pub mod methods;
pub mod organizations;
pub mod session;
pub mod units;
pub mod users;

use uuid::Uuid;

use crate::error::Error;

/// Standard query parameters for server-paginated list endpoints.
pub(crate) fn page_params(
    page: u32,
    page_size: u32,
    keyword: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("pageCurrent", page.to_string()),
        ("pageSize", page_size.to_string()),
    ];
    if let Some(k) = keyword.filter(|k| !k.is_empty()) {
        params.push(("keyword", k.to_owned()));
    }
    params
}

/// A nil id would turn `…/{id}` into the collection route; refuse
/// before any request is issued.
pub(crate) fn require_id(id: Uuid) -> Result<Uuid, Error> {
    if id.is_nil() {
        return Err(Error::Validation {
            status: 400,
            message: "entity id must not be empty".into(),
        });
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_omit_empty_keyword() {
        let params = page_params(2, 20, Some(""));
        assert_eq!(
            params,
            vec![
                ("pageCurrent", "2".to_owned()),
                ("pageSize", "20".to_owned())
            ]
        );
    }

    #[test]
    fn page_params_include_keyword() {
        let params = page_params(1, 10, Some("kg"));
        assert!(params.contains(&("keyword", "kg".to_owned())));
    }

    #[test]
    fn nil_id_is_rejected() {
        assert!(require_id(Uuid::nil()).is_err());
        assert!(require_id(Uuid::from_u128(1)).is_ok());
    }
}

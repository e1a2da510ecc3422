//! Customer site model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use brightclub_core::error::CoreError;
use brightclub_core::types::{DbId, Timestamp};
use brightclub_core::validation::{optional_text, require_text};

use crate::resource::Resource;

/// A row from the `customer_sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerSite {
    pub id: DbId,
    pub title: Option<String>,
    pub location: Option<String>,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/customer-sites`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomerSite {
    pub title: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// A customer site that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomerSite {
    pub title: Option<String>,
    pub location: Option<String>,
    pub image_url: String,
    pub description: Option<String>,
}

impl TryFrom<CreateCustomerSite> for NewCustomerSite {
    type Error = CoreError;

    fn try_from(body: CreateCustomerSite) -> Result<Self, Self::Error> {
        Ok(Self {
            image_url: require_text("image_url", body.image_url)?,
            title: optional_text(body.title),
            location: optional_text(body.location),
            description: optional_text(body.description),
        })
    }
}

/// The `customer_sites` resource.
pub struct CustomerSites;

impl Resource for CustomerSites {
    type Row = CustomerSite;
    type Payload = CreateCustomerSite;
    type New = NewCustomerSite;

    const TABLE: &'static str = "customer_sites";
    const ENTITY: &'static str = "customer site";
    const COLUMNS: &'static str = "id::BIGINT AS id, title, location, image_url, description, \
                                   created_at::TIMESTAMPTZ AS created_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["title", "location", "image_url", "description"];
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS customer_sites (
            id BIGSERIAL PRIMARY KEY,
            title TEXT,
            location TEXT,
            image_url TEXT NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )";

    fn insert_values(input: &NewCustomerSite) -> Vec<Option<&str>> {
        vec![
            input.title.as_deref(),
            input.location.as_deref(),
            Some(input.image_url.as_str()),
            input.description.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_body_requires_image_url() {
        let err = NewCustomerSite::try_from(CreateCustomerSite::default()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "image_url is required");
    }

    #[test]
    fn only_image_url_is_mandatory() {
        let body = CreateCustomerSite {
            image_url: Some("http://x/1.png".into()),
            ..Default::default()
        };
        let site = NewCustomerSite::try_from(body).unwrap();
        assert_eq!(site.image_url, "http://x/1.png");
        assert_eq!(site.title, None);
        assert_eq!(site.location, None);
        assert_eq!(site.description, None);
    }

    #[test]
    fn empty_optional_fields_become_null() {
        let body: CreateCustomerSite = serde_json::from_value(serde_json::json!({
            "image_url": "http://x/1.png",
            "title": "",
            "description": "Main entrance"
        }))
        .unwrap();
        let site = NewCustomerSite::try_from(body).unwrap();
        assert_eq!(site.title, None);
        assert_eq!(site.description.as_deref(), Some("Main entrance"));
        assert_eq!(
            CustomerSites::insert_values(&site),
            vec![None, None, Some("http://x/1.png"), Some("Main entrance")]
        );
    }
}

//! Project model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use brightclub_core::error::CoreError;
use brightclub_core::types::{DbId, Timestamp};
use brightclub_core::validation::{optional_text, require_text};

use crate::resource::Resource;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub location: String,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// A project that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub location: String,
    pub image_url: String,
    pub description: Option<String>,
}

impl TryFrom<CreateProject> for NewProject {
    type Error = CoreError;

    /// Required fields are checked in column order; the first missing one is reported.
    fn try_from(body: CreateProject) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require_text("title", body.title)?,
            location: require_text("location", body.location)?,
            image_url: require_text("image_url", body.image_url)?,
            description: optional_text(body.description),
        })
    }
}

/// The `projects` resource.
pub struct Projects;

impl Resource for Projects {
    type Row = Project;
    type Payload = CreateProject;
    type New = NewProject;

    const TABLE: &'static str = "projects";
    const ENTITY: &'static str = "project";
    const COLUMNS: &'static str = "id::BIGINT AS id, title, location, image_url, description, \
                                   created_at::TIMESTAMPTZ AS created_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["title", "location", "image_url", "description"];
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS projects (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            location TEXT NOT NULL,
            image_url TEXT NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )";

    fn insert_values(input: &NewProject) -> Vec<Option<&str>> {
        vec![
            Some(input.title.as_str()),
            Some(input.location.as_str()),
            Some(input.image_url.as_str()),
            input.description.as_deref(),
        ]
    }
}

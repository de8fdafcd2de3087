use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    entities::{
        option_fields::OptionField,
        validators::{
            new_validation_error, null_not_allowed, validate_not_blank, validate_patch_bool,
            validate_patch_text,
        },
    },
    errors::AppError,
};

// ───── Category ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    #[serde(rename = "Mobile Apps")]
    MobileApps,
    Games,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Frontend,
        ProjectCategory::Fullstack,
        ProjectCategory::MobileApps,
        ProjectCategory::Games,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Fullstack => "Fullstack",
            ProjectCategory::MobileApps => "Mobile Apps",
            ProjectCategory::Games => "Games",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::invalid_field("category", CATEGORY_MESSAGE))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATEGORY_MESSAGE: &str = "Category must be one of: Frontend, Fullstack, Mobile Apps, Games";

// ───── Database Models ──────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub category: String,
    pub featured: bool,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub category: ProjectCategory,
    pub featured: bool,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated project ready to be inserted; `id` and `created_at` come from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub category: ProjectCategory,
    pub featured: bool,
    pub content: Option<String>,
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<ProjectCategory>,
    pub featured: Option<bool>,
    pub content: OptionField<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(required(message = "Title is required"), custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(required(message = "Description is required"), custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    #[validate(required(message = "Image is required"), custom(function = "validate_not_blank"))]
    pub image: Option<String>,

    #[validate(required(message = "Technologies are required"), custom(function = "validate_technologies"))]
    pub technologies: Option<Vec<String>>,

    #[validate(required(message = "Live URL is required"), custom(function = "validate_not_blank"))]
    pub live_url: Option<String>,

    #[validate(required(message = "GitHub URL is required"), custom(function = "validate_not_blank"))]
    pub github_url: Option<String>,

    #[validate(required(message = "Category is required"), custom(function = "validate_category"))]
    pub category: Option<String>,

    pub featured: Option<bool>,

    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_patch_text"))]
    pub title: OptionField<String>,

    #[validate(custom(function = "validate_patch_text"))]
    pub description: OptionField<String>,

    #[validate(custom(function = "validate_patch_text"))]
    pub image: OptionField<String>,

    #[validate(custom(function = "validate_patch_technologies"))]
    pub technologies: OptionField<Vec<String>>,

    #[validate(custom(function = "validate_patch_text"))]
    pub live_url: OptionField<String>,

    #[validate(custom(function = "validate_patch_text"))]
    pub github_url: OptionField<String>,

    #[validate(custom(function = "validate_patch_category"))]
    pub category: OptionField<String>,

    #[validate(custom(function = "validate_patch_bool"))]
    pub featured: OptionField<bool>,

    pub content: OptionField<String>,
}

/// Query string accepted by the project list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.is_empty() {
        return Err(new_validation_error("technologies_empty", "At least one technology is required"));
    }
    if technologies.iter().any(|label| label.trim().is_empty()) {
        return Err(new_validation_error("technology_blank", "Technologies cannot contain empty labels"));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if ProjectCategory::from_str(category).is_err() {
        return Err(new_validation_error("invalid_category", CATEGORY_MESSAGE));
    }
    Ok(())
}

pub fn validate_patch_technologies(value: &OptionField<Vec<String>>) -> Result<(), ValidationError> {
    match value {
        OptionField::Unchanged => Ok(()),
        OptionField::SetToNull => Err(null_not_allowed()),
        OptionField::SetToValue(technologies) => validate_technologies(technologies),
    }
}

pub fn validate_patch_category(value: &OptionField<String>) -> Result<(), ValidationError> {
    match value {
        OptionField::Unchanged => Ok(()),
        OptionField::SetToNull => Err(null_not_allowed()),
        OptionField::SetToValue(category) => validate_category(category),
    }
}

// ───── Conversions ──────────────────────────────────────────────────

fn present<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::invalid_field(field, "Field is required"))
}

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = AppError;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectInsert {
            title: present("title", value.title)?,
            description: present("description", value.description)?,
            image: present("image", value.image)?,
            technologies: present("technologies", value.technologies)?,
            live_url: present("liveUrl", value.live_url)?,
            github_url: present("githubUrl", value.github_url)?,
            category: present("category", value.category)?.parse()?,
            featured: value.featured.unwrap_or(false),
            content: value.content,
        })
    }
}

impl TryFrom<UpdateProjectRequest> for ProjectChanges {
    type Error = AppError;

    fn try_from(value: UpdateProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let category = match value.category.into_option().flatten() {
            Some(category) => Some(category.parse()?),
            None => None,
        };

        Ok(ProjectChanges {
            title: value.title.into_option().flatten(),
            description: value.description.into_option().flatten(),
            image: value.image.into_option().flatten(),
            technologies: value.technologies.into_option().flatten(),
            live_url: value.live_url.into_option().flatten(),
            github_url: value.github_url.into_option().flatten(),
            category,
            featured: value.featured.into_option().flatten(),
            content: value.content,
        })
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = AppError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let category = ProjectCategory::from_str(&row.category).map_err(|_| {
            AppError::InternalError(format!(
                "Project {} has unknown category '{}'",
                row.id, row.category
            ))
        })?;

        Ok(Project {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            technologies: row.technologies,
            live_url: row.live_url,
            github_url: row.github_url,
            category,
            featured: row.featured,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        *self == ProjectChanges::default()
    }

    /// Merge the provided fields onto an existing project. `id` and `created_at` are never touched.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(image) = &self.image {
            project.image = image.clone();
        }
        if let Some(technologies) = &self.technologies {
            project.technologies = technologies.clone();
        }
        if let Some(live_url) = &self.live_url {
            project.live_url = live_url.clone();
        }
        if let Some(github_url) = &self.github_url {
            project.github_url = github_url.clone();
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        if let Some(content) = self.content.clone().into_option() {
            project.content = content;
        }
    }
}

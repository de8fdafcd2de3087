use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::validators::{validate_email_address, validate_not_blank},
    errors::AppError,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct NewContactMessageRequest {
    #[validate(required(message = "Name is required"), custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"), custom(function = "validate_email_address"))]
    pub email: Option<String>,

    #[validate(required(message = "Subject is required"), custom(function = "validate_not_blank"))]
    pub subject: Option<String>,

    #[validate(required(message = "Message is required"), custom(function = "validate_not_blank"))]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactReceivedResponse {
    pub success: bool,
    pub message: String,
}

impl TryFrom<NewContactMessageRequest> for ContactMessageInsert {
    type Error = AppError;

    fn try_from(value: NewContactMessageRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        match (value.name, value.email, value.subject, value.message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactMessageInsert {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(AppError::invalid_field("body", "All fields are required")),
        }
    }
}

//! Example DTOs
//!
//! Data transfer objects for the example API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::example::{CreateExampleData, Example, UpdateExampleData};

/// Validates that a number is neither zero nor non-finite
fn validate_lucky_number(value: f64) -> Result<(), validator::ValidationError> {
    if !value.is_finite() {
        let mut error = validator::ValidationError::new("lucky_number");
        error.message = Some("lucky_number must be a finite number".into());
        return Err(error);
    }
    if value == 0.0 {
        let mut error = validator::ValidationError::new("lucky_number");
        error.message = Some("lucky_number is required and must be non-zero".into());
        return Err(error);
    }
    Ok(())
}

/// DTO for creating a new example
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExampleDto {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_lucky_number"))]
    pub lucky_number: f64,

    #[serde(default)]
    pub is_premium: bool,
}

impl From<CreateExampleDto> for CreateExampleData {
    fn from(dto: CreateExampleDto) -> Self {
        Self {
            name: dto.name,
            lucky_number: dto.lucky_number,
            is_premium: dto.is_premium,
        }
    }
}

/// DTO for a partial example update (PUT)
///
/// All fields are optional: an absent field leaves the stored value
/// unchanged, a present field is written as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExampleDto {
    pub name: Option<String>,
    pub lucky_number: Option<f64>,
    pub is_premium: Option<bool>,
}

impl From<UpdateExampleDto> for UpdateExampleData {
    fn from(dto: UpdateExampleDto) -> Self {
        Self {
            name: dto.name,
            lucky_number: dto.lucky_number,
            is_premium: dto.is_premium,
        }
    }
}

/// Example response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ExampleResponseDto {
    pub id: Uuid,
    pub name: String,
    pub lucky_number: f64,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Example> for ExampleResponseDto {
    fn from(example: Example) -> Self {
        Self {
            id: *example.id().as_uuid(),
            name: example.name().to_string(),
            lucky_number: example.lucky_number(),
            is_premium: example.is_premium(),
            created_at: example.created_at(),
            updated_at: example.updated_at(),
        }
    }
}

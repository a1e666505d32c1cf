use std::borrow::Cow;

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    errors::AppError,
    utils::images::read_image_file,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_SUMMARY_LENGTH: u64 = 300;
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Meal {
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Fully populated write model: slug assigned, instructions sanitized,
/// asset already on disk under `image`.
#[derive(Debug)]
pub struct MealInsert {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Raw, caller-supplied meal data. Carries no identity; the slug and the
/// stored image path are assigned during create.
#[derive(Debug, Validate)]
pub struct MealDraft {
    #[validate(
        length(max = MAX_TITLE_LENGTH),
        custom(function = "validate_required_text")
    )]
    pub title: String,

    #[validate(
        length(max = MAX_SUMMARY_LENGTH),
        custom(function = "validate_required_text")
    )]
    pub summary: String,

    #[validate(custom(function = "validate_required_text"))]
    pub instructions: String,

    #[validate(custom(function = "validate_required_text"))]
    pub creator: String,

    #[validate(custom(function = "validate_creator_email"))]
    pub creator_email: String,

    #[validate(length(min = 1, message = "An image file is required"))]
    pub image_bytes: Vec<u8>,

    pub image_file_name: String,
}

/// The multipart share-a-meal form. Field names match the public form.
#[derive(Debug, MultipartForm)]
pub struct MealUpload {
    pub title: Text<String>,

    pub summary: Text<String>,

    pub instructions: Text<String>,

    #[multipart(rename = "name")]
    pub creator: Text<String>,

    #[multipart(rename = "email")]
    pub creator_email: Text<String>,

    #[multipart(limit = "5MB")]
    pub image: TempFile,
}

impl MealUpload {
    /// Reads and validates the uploaded image file, producing the draft the
    /// meal service consumes.
    pub async fn into_draft(self) -> Result<MealDraft, AppError> {
        let file_name = self
            .image
            .file_name
            .clone()
            .ok_or_else(|| AppError::invalid_field("image", "Image file name is missing"))?;

        let image_bytes = read_image_file(&file_name, self.image.file.path(), MAX_IMAGE_BYTES)
            .await
            .map_err(|e| AppError::invalid_field("image", e.to_string()))?;

        Ok(MealDraft {
            title: self.title.into_inner(),
            summary: self.summary.into_inner(),
            instructions: self.instructions.into_inner(),
            creator: self.creator.into_inner(),
            creator_email: self.creator_email.into_inner(),
            image_bytes,
            image_file_name: file_name,
        })
    }
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("required_text", "Must not be blank"));
    }
    Ok(())
}

pub fn validate_creator_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(new_validation_error("email_blank", "Creator email must not be blank"));
    }
    if !email.contains('@') {
        return Err(new_validation_error("email_invalid", "Creator email must contain '@'"));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

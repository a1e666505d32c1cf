use chrono::Utc;
use tracing::warn;
use validator::Validate;

use crate::{
    entities::meal::{Meal, MealDraft, MealInsert},
    errors::AppError,
    media::fs_store::MediaStore,
    repositories::meal::MealRepository,
    utils::{sanitize::sanitize_rich_text, slugs::unique_slug},
};

pub struct MealService<R, M>
where
    R: MealRepository,
    M: MediaStore,
{
    pub repo: R,
    pub media: M,
}

impl<R, M> MealService<R, M>
where
    R: MealRepository,
    M: MediaStore,
{
    pub fn new(repo: R, media: M) -> Self {
        MealService { repo, media }
    }

    /// Creates a new meal from the provided draft: validate, sanitize, slug,
    /// write the asset, write the row. The slug pre-check and the insert are
    /// not atomic, so a unique-constraint failure at insert time is retried
    /// once with a freshly probed slug before being surfaced as transient.
    pub async fn create_meal(&self, draft: MealDraft) -> Result<Meal, AppError> {
        draft.validate()?;

        let instructions = sanitize_rich_text(&draft.instructions);

        match self.persist_meal(&draft, &instructions).await {
            Err(AppError::Conflict(_)) => {
                warn!(title = %draft.title, "slug taken at insert time, retrying once");
                self.persist_meal(&draft, &instructions).await.map_err(|e| match e {
                    AppError::Conflict(_) => {
                        AppError::StorageError("Could not allocate a unique slug, please retry".into())
                    }
                    other => other,
                })
            }
            result => result,
        }
    }

    /// Retrieves a meal by its slug.
    pub async fn get_meal(&self, slug: &str) -> Result<Option<Meal>, AppError> {
        self.repo.get_meal_by_slug(slug).await
    }

    /// Retrieves all meals.
    pub async fn list_meals(&self) -> Result<Vec<Meal>, AppError> {
        self.repo.get_all_meals().await
    }

    /// Deletes a meal and its image asset by slug. Returns false when no
    /// such meal exists. The asset is removed first, best-effort: a row
    /// without its asset is user-visible breakage, so the row goes away
    /// even when asset removal fails.
    pub async fn delete_meal(&self, slug: &str) -> Result<bool, AppError> {
        let Some(meal) = self.repo.get_meal_by_slug(slug).await? else {
            return Ok(false);
        };

        if let Err(e) = self.media.remove(&meal.image).await {
            warn!(path = %meal.image, error = %e, "failed to remove asset, deleting row anyway");
        }

        self.repo.delete_meal_by_slug(slug).await
    }

    async fn persist_meal(&self, draft: &MealDraft, instructions: &str) -> Result<Meal, AppError> {
        let repo = &self.repo;
        let slug = unique_slug(&draft.title, move |candidate| async move {
            repo.meal_exists_with_slug(&candidate).await
        })
        .await?;

        // Asset before row: a committed row must never reference an asset
        // that does not exist.
        let image = self
            .media
            .save(&slug, &draft.image_file_name, &draft.image_bytes)
            .await?;

        let insert = MealInsert {
            slug,
            title: draft.title.clone(),
            summary: draft.summary.clone(),
            instructions: instructions.to_string(),
            creator: draft.creator.clone(),
            creator_email: draft.creator_email.clone(),
            image,
            created_at: Utc::now(),
        };

        match self.repo.insert_meal(&insert).await {
            Ok(meal) => Ok(meal),
            Err(e) => {
                if let Err(cleanup) = self.media.remove(&insert.image).await {
                    warn!(path = %insert.image, error = %cleanup, "failed to remove asset after insert error");
                }
                Err(e)
            }
        }
    }
}

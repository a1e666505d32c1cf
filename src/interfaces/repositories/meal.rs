use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::meal::{Meal, MealInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxMealRepo,
};

#[async_trait]
pub trait MealRepository: Sync + Send {
    async fn insert_meal(&self, meal: &MealInsert) -> Result<Meal, AppError>;
    async fn get_meal_by_slug(&self, slug: &str) -> Result<Option<Meal>, AppError>;
    async fn get_all_meals(&self) -> Result<Vec<Meal>, AppError>;
    async fn meal_exists_with_slug(&self, slug: &str) -> Result<bool, AppError>;
    async fn delete_meal_by_slug(&self, slug: &str) -> Result<bool, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxMealRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxMealRepo { pool }
    }
}

#[async_trait]
impl MealRepository for SqlxMealRepo {
    async fn insert_meal(&self, meal: &MealInsert) -> Result<Meal, AppError> {
        // Slug uniqueness is enforced here by the meals_slug_key constraint,
        // not merely by the service's pre-check.
        let inserted = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (slug, title, summary, instructions, creator, creator_email, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, slug, title, summary, instructions, creator, creator_email, image, created_at
            "#,
        )
        .bind(&meal.slug)
        .bind(&meal.title)
        .bind(&meal.summary)
        .bind(&meal.instructions)
        .bind(&meal.creator)
        .bind(&meal.creator_email)
        .bind(&meal.image)
        .bind(meal.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("meals_slug_key") {
                    return AppError::Conflict("Slug already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(inserted)
    }

    async fn get_meal_by_slug(&self, slug: &str) -> Result<Option<Meal>, AppError> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, slug, title, summary, instructions, creator, creator_email, image, created_at
            FROM meals
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(meal)
    }

    async fn get_all_meals(&self) -> Result<Vec<Meal>, AppError> {
        let meals = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, slug, title, summary, instructions, creator, creator_email, image, created_at
            FROM meals
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(meals)
    }

    async fn meal_exists_with_slug(&self, slug: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM meals
                WHERE slug = $1
            )
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_meal_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

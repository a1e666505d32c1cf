use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxMealRepo {
    pub pool: PgPool,
}

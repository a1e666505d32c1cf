pub mod meal;
pub mod sqlx_repo;

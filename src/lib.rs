mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, media, utils};

use media::fs_store::FsMediaStore;
use repositories::sqlx_repo::SqlxMealRepo;
use use_cases::meals::MealService;

pub struct AppState {
    pub meal_service: AppMealService,
}

pub type AppMealService = MealService<SqlxMealRepo, FsMediaStore>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let meal_repo = SqlxMealRepo::new(pool);
        let media_store = FsMediaStore::new(&config.media_root, &config.media_public_base);

        AppState {
            meal_service: MealService::new(meal_repo, media_store),
        }
    }
}

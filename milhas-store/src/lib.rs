pub mod app_config;
pub mod database;
pub mod repository;
pub mod promotion_repo;
pub mod goal_repo;
pub mod memory;

pub use database::DbClient;
pub use repository::{GoalRepository, PromotionRepository, StoreError, StoreResult};
pub use promotion_repo::StorePromotionRepository;
pub use goal_repo::StoreGoalRepository;
pub use memory::InMemoryStore;

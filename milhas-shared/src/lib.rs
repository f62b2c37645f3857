pub mod models;

pub use models::goal::MileageGoal;
pub use models::promotion::ScrapedPromotion;

pub mod loader;
pub mod types;

pub use loader::{load_dataset, load_from_file, parse_dataset};
pub use types::{ItemId, Rating, RatingDataset, RatingProfile, UserId};

// Database access for the seeder

pub mod schema;
pub mod seed;

pub use seed::{seed, seed_database, SeedSummary};

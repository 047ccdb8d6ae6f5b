pub mod error;
pub mod id;
pub mod model;
pub mod seed;
pub mod store;

pub use error::{LearnbaseError, Result};
pub use model::{Content, Question, Reply, Section, User};
pub use seed::SeedData;
pub use store::{Store, StoreConfig};

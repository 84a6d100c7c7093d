pub mod config;
pub mod error;
pub mod repository;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::{EntityKind, TaskboardError};
pub use repository::Repository;
pub use result::TaskboardResult;
pub use traits::Entity;

pub mod error;
pub mod fallback;
pub mod model;

pub use error::{ContentServiceError, FetchError};
pub use fallback::FallbackPlan;
pub use model::{ContentRecord, ContentRequest, ContentSource, Locator};

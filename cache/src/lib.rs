mod cache;
pub use cache::Cache;

mod options;
pub use options::Options;

mod memory;
pub use memory::MemoryCache;

mod presence;
pub use presence::{PresenceResolver, ResolvedUser};

mod error;
pub use error::{CacheError, Result};

pub mod model;

pub mod error;
pub mod index;
pub mod keyword;
pub mod search;
pub mod source;

pub use error::{Error, Result};
pub use index::{insert_last_occurrence, IndexBuilder, KeywordIndex, Occurrence};
pub use keyword::{normalize, NoiseWords};
pub use search::{top5_search, MAX_RESULTS};

mod error;
mod resolve;
mod store;

pub use error::{ResolveError, Result};
pub use resolve::{rooted, under, working_dir, Candidate, PathResolver, Probe, SearchDirs};
pub use store::{file_name_of, ImageStore, LocalFs};

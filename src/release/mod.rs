//! Release metadata and the network client that fetches it
mod metadata;
mod source;

pub use metadata::{normalize_tag, ReleaseMetadata, NOTES_SEPARATOR};
#[cfg(test)]
pub use source::MockReleaseSource;
pub use source::{HttpReleaseSource, ReleaseSource};

pub mod archive;
pub mod error;
pub mod lz;
pub mod manifest;
pub mod table;
pub mod variant;

pub use archive::Archive;
pub use error::{Error, Result};
pub use manifest::{LoadOptions, Manifest};
pub use variant::ArchiveVariant;

//! Tool providers.
//!
//! Each provider owns one resource (a folder, an API client) and exposes
//! its operations as `Result`-returning async methods. Turning failures
//! into the values a tool returns is left to [`crate::tools`].

pub mod pdf;
pub mod scholar;

pub use pdf::{PdfFolder, PdfFolderProvider};
pub use scholar::ScholarProvider;

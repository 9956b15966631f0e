//! Data models.
//!
//! `external` mirrors what the Graph API sends (every field optional),
//! `records` is what the tools return (every key present, defaults applied).

mod enums;
mod external;
mod inputs;
mod records;

pub use enums::EntryErrorPolicy;
pub use external::{CitationEdge, CitationPage, ExternalAuthor, ExternalAuthorRef, ExternalPaper, SearchPage};
pub use inputs::*;
pub use records::{
    AuthorRecord, AuthorRef, CitationEntry, CitationReferenceBundle, Entry, ErrorRecord,
    PaperRecord,
};

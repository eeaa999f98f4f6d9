//! qtj-core: query batch parsing, normalization, and JSON packing
//!
//! This crate focuses on a small, well-factored surface:
//! - Region splitter for the header/core layout of query files
//! - Brace-depth line normalizer shared by both regions
//! - Directory packer producing one key-sorted JSON document
//! - Query composition from a packed document (versioned GRAPH sections)
//!
pub mod compose;
pub mod lines;
pub mod model;
pub mod pack;
pub mod split;

pub use compose::{VersionContext, compose_query, load_document};
pub use lines::normalize_region;
pub use model::{LineMap, QueryDocument, QueryRecord};
pub use pack::{
    document_to_pretty_json, find_query_files, pack_dir, pack_file, query_id_from_name,
    write_document,
};
pub use split::split_regions;

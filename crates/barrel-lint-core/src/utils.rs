//! Utility functions for rule implementations.

pub mod paths;

#[doc(inline)]
pub use paths::{
    count_directory_segments, count_parent_traversals, is_bare_directory_import,
    is_index_like_import, relative_to_source_root,
};

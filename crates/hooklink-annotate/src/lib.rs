//! Batch annotator for generated hook documentation.
//!
//! Rewrites each markdown page in a hooks docs directory in place, inserting
//! a links block (documentation page + source file) after the page's first
//! line.

pub mod batch;
pub mod links;
pub mod slug;

pub use batch::{
    AnnotateConfig, AnnotateError, BatchAnnotator, BatchReport, FileError, FileFailure, Outcome,
};
pub use links::{annotation_block, insert_after_first_newline};
pub use slug::{hook_name, slugify};

//! # lore-validation
//!
//! Two pure checks over project artefacts:
//! - **Alignment**: keyword-concept overlap between a document and the code it describes.
//! - **Significance**: scoring and categorising a code change from its size and description.

pub mod alignment;
pub mod significance;

pub use alignment::check_doc_code_alignment;
pub use significance::{ChangeClassifier, SignificanceBreakdown};

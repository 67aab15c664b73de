//! Input data: sample tables, composition metadata and prediction stores
//!
//! All three are read-only after loading. Lookups that miss fail loudly with
//! the offending id rather than defaulting.

mod metadata;
mod predictions;
mod sample;
mod table;

pub use metadata::{Composition, MetadataStore};
pub use predictions::PredictionStore;
pub use sample::{Sample, SampleId};
pub use table::{SampleTable, TargetRow, ID_COLUMN, TARGET_COLUMN};

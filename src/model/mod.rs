//! Model glue: head selection and checkpoint key matching
//!
//! The backbone itself is not reimplemented here; these types describe which
//! head a prediction set came from and which checkpoint tensors fit a model.

mod checkpoint;
mod head;

pub use checkpoint::{read_tensor_names, CheckpointMatch, BACKBONE_PREFIX};
pub use head::{HeadTask, HeadType};

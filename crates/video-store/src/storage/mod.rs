mod backend;
mod keys;

pub use backend::*;
pub use keys::{object_key, object_path};
pub use object_store::ObjectStore;

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::BackendError;
pub use memory::MemoryStore;
pub use record::Record;
pub use traits::RecordStore;

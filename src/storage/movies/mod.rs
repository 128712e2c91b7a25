pub mod in_memory;
pub mod json_file;
pub mod store;

pub use in_memory::InMemoryMovieStore;
pub use json_file::{DataFileStatus, JsonFileStore};
pub use store::MovieStore;

pub mod movie;
pub mod page;
pub mod stats;

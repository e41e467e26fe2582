//! Data models for Libris

pub mod book;
pub mod enums;
pub mod library;
pub mod mapping;
pub mod page;

// Re-export commonly used types
pub use book::Book;
pub use enums::{LibraryStatus, MappingStatus};
pub use library::Library;
pub use mapping::LibraryBook;
pub use page::Paginated;

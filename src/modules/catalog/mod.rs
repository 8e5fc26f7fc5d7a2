//! Books, members, and the bookkeeping that keeps lending status consistent.

pub mod error;
pub mod models;
pub mod store;

pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use models::{Book, BookId, BookStatus, Member, MemberId};
pub use store::CatalogStore;

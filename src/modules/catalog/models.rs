use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a book, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

/// Identifier of a member, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

macro_rules! id_impls {
    ($ty:ident) => {
        impl $ty {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_impls!(BookId);
id_impls!(MemberId);

/// Lending status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Borrowed => f.write_str("Borrowed"),
        }
    }
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Whether the book is on the shelf or lent out
    pub status: BookStatus,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: MemberId,
    /// Display name of the member
    pub name: String,
    /// Books currently held, in borrow order.
    ///
    /// Only identifiers are kept; the catalog's book records stay canonical.
    pub borrowed: Vec<BookId>,
}

impl Member {
    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed.contains(&book_id)
    }
}

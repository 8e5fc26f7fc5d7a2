//! Errors reported by the catalog store.

use thiserror::Error;

use super::models::{BookId, MemberId};

/// Broad category of a refused catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NotAvailable,
    NotBorrowed,
    NotBorrowedByMember,
}

/// A catalog operation that was refused; the store is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("book with id {0} does not exist")]
    BookNotFound(BookId),

    /// Unknown member named as the counterparty of a loan.
    #[error("member with id {0} not found")]
    MemberNotFound(MemberId),

    /// Unknown member addressed directly (removal, listing their books).
    #[error("member with id {0} does not exist")]
    MemberDoesNotExist(MemberId),

    #[error("book {title} is not available")]
    NotAvailable { book_id: BookId, title: String },

    #[error("book {title} is not borrowed")]
    NotBorrowed { book_id: BookId, title: String },

    #[error("book {title} is not borrowed by {member}")]
    NotBorrowedByMember {
        book_id: BookId,
        title: String,
        member_id: MemberId,
        member: String,
    },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BookNotFound(_) | Self::MemberNotFound(_) | Self::MemberDoesNotExist(_) => {
                ErrorKind::NotFound
            }
            Self::NotAvailable { .. } => ErrorKind::NotAvailable,
            Self::NotBorrowed { .. } => ErrorKind::NotBorrowed,
            Self::NotBorrowedByMember { .. } => ErrorKind::NotBorrowedByMember,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::BookNotFound(_) => "book_not_found",
            Self::MemberNotFound(_) | Self::MemberDoesNotExist(_) => "member_not_found",
            Self::NotAvailable { .. } => "not_available",
            Self::NotBorrowed { .. } => "not_borrowed",
            Self::NotBorrowedByMember { .. } => "not_borrowed_by_member",
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            CatalogError::BookNotFound(BookId::new(99)).to_string(),
            "book with id 99 does not exist"
        );
        assert_eq!(
            CatalogError::MemberNotFound(MemberId::new(4)).to_string(),
            "member with id 4 not found"
        );
        assert_eq!(
            CatalogError::MemberDoesNotExist(MemberId::new(4)).to_string(),
            "member with id 4 does not exist"
        );
        assert_eq!(
            CatalogError::MemberDoesNotExist(MemberId::new(4)).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_kind_mapping() {
        let err = CatalogError::MemberNotFound(MemberId::new(1));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "member_not_found");

        let err = CatalogError::NotBorrowedByMember {
            book_id: BookId::new(1),
            title: "Dune".to_string(),
            member_id: MemberId::new(2),
            member: "Bob".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotBorrowedByMember);
        assert_eq!(err.to_string(), "book Dune is not borrowed by Bob");
    }
}

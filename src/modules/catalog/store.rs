use std::collections::BTreeMap;

use super::error::{CatalogError, CatalogResult};
use super::models::{Book, BookId, BookStatus, Member, MemberId};

/// In-memory catalog of books and members.
///
/// A book is `Borrowed` exactly when one member's borrow list names it. Every
/// mutation below keeps that true; a refused operation changes nothing.
/// Identifiers come from counters owned by the store and are never reused.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: BTreeMap<BookId, Book>,
    members: BTreeMap<MemberId, Member>,
    last_book_id: u64,
    last_member_id: u64,
}

fn refused(err: CatalogError) -> CatalogError {
    tracing::warn!(code = err.code(), error = %err, "catalog operation refused");
    err
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book under the next free identifier, initially `Available`.
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> Book {
        self.last_book_id += 1;
        let book = Book {
            id: BookId::new(self.last_book_id),
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
        };
        self.books.insert(book.id, book.clone());

        tracing::debug!(book_id = %book.id, title = %book.title, "book added");
        book
    }

    /// Register a member under the next free identifier.
    pub fn add_member(&mut self, name: impl Into<String>) -> Member {
        self.last_member_id += 1;
        let member = Member {
            id: MemberId::new(self.last_member_id),
            name: name.into(),
            borrowed: Vec::new(),
        };
        self.members.insert(member.id, member.clone());

        tracing::debug!(member_id = %member.id, name = %member.name, "member added");
        member
    }

    /// Delete a book, first taking it back from its holder if it is lent out.
    ///
    /// Removing an unknown book is a no-op, not an error.
    pub fn remove_book(&mut self, book_id: BookId) {
        let Some(book) = self.books.get(&book_id) else {
            tracing::debug!(book_id = %book_id, "remove of unknown book ignored");
            return;
        };

        if book.status == BookStatus::Borrowed {
            match self.holder_of(book_id) {
                Some(member_id) => {
                    if let Err(err) = self.return_book(book_id, member_id) {
                        tracing::warn!(book_id = %book_id, member_id = %member_id, error = %err, "implicit return failed");
                    }
                }
                None => tracing::warn!(book_id = %book_id, "borrowed book has no holder"),
            }
        }

        self.books.remove(&book_id);
        tracing::debug!(book_id = %book_id, "book removed");
    }

    /// Delete a member, putting every book they hold back on the shelf.
    pub fn remove_member(&mut self, member_id: MemberId) -> CatalogResult<Member> {
        let member = self
            .members
            .remove(&member_id)
            .ok_or_else(|| refused(CatalogError::MemberDoesNotExist(member_id)))?;

        for book_id in &member.borrowed {
            if let Some(book) = self.books.get_mut(book_id) {
                book.status = BookStatus::Available;
            }
        }

        tracing::debug!(
            member_id = %member_id,
            released = member.borrowed.len(),
            "member removed"
        );
        Ok(member)
    }

    /// Lend an available book to a member.
    pub fn borrow_book(&mut self, book_id: BookId, member_id: MemberId) -> CatalogResult<()> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or_else(|| refused(CatalogError::BookNotFound(book_id)))?;
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or_else(|| refused(CatalogError::MemberNotFound(member_id)))?;

        if book.status != BookStatus::Available {
            return Err(refused(CatalogError::NotAvailable {
                book_id,
                title: book.title.clone(),
            }));
        }

        book.status = BookStatus::Borrowed;
        member.borrowed.push(book_id);

        tracing::debug!(book_id = %book_id, member_id = %member_id, "book borrowed");
        Ok(())
    }

    /// Take a book back from the member holding it.
    pub fn return_book(&mut self, book_id: BookId, member_id: MemberId) -> CatalogResult<()> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or_else(|| refused(CatalogError::BookNotFound(book_id)))?;
        let member = self
            .members
            .get_mut(&member_id)
            .ok_or_else(|| refused(CatalogError::MemberNotFound(member_id)))?;

        if book.status == BookStatus::Available {
            return Err(refused(CatalogError::NotBorrowed {
                book_id,
                title: book.title.clone(),
            }));
        }

        let Some(idx) = member.borrowed.iter().position(|id| *id == book_id) else {
            return Err(refused(CatalogError::NotBorrowedByMember {
                book_id,
                title: book.title.clone(),
                member_id,
                member: member.name.clone(),
            }));
        };

        book.status = BookStatus::Available;
        member.borrowed.remove(idx);

        tracing::debug!(book_id = %book_id, member_id = %member_id, "book returned");
        Ok(())
    }

    /// All members in identifier order.
    pub fn list_members(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }

    /// All books currently on the shelf, in identifier order.
    pub fn list_available_books(&self) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| book.is_available())
            .cloned()
            .collect()
    }

    /// Books held by a member, in borrow order, with their current records.
    pub fn list_borrowed_books(&self, member_id: MemberId) -> CatalogResult<Vec<Book>> {
        let member = self
            .members
            .get(&member_id)
            .ok_or_else(|| refused(CatalogError::MemberDoesNotExist(member_id)))?;

        Ok(member
            .borrowed
            .iter()
            .filter_map(|id| self.books.get(id))
            .cloned()
            .collect())
    }

    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.books.get(&book_id)
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.get(&member_id)
    }

    /// Member whose borrow list contains `book_id`, if any.
    pub fn holder_of(&self, book_id: BookId) -> Option<MemberId> {
        self.members
            .values()
            .find(|member| member.holds(book_id))
            .map(|member| member.id)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

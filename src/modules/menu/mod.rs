//! Interactive menu over the catalog store.

pub mod actions;
pub mod render;

use anyhow::Context;
use library_kernel::{ActionCtx, ActionRegistry, Console, FnAction, Settings};

use crate::modules::catalog::CatalogStore;

/// Register the nine catalog actions in menu order.
pub fn register_all(registry: &mut ActionRegistry<CatalogStore>) -> anyhow::Result<()> {
    let entries: [FnAction<CatalogStore>; 9] = [
        FnAction::new("1", "Add a new book", actions::add_book),
        FnAction::new("2", "Add a new member", actions::add_member),
        FnAction::new("3", "Remove an existing member", actions::remove_member),
        FnAction::new("4", "List all members", actions::list_members),
        FnAction::new("5", "Remove an existing book", actions::remove_book),
        FnAction::new("6", "Borrow a book", actions::borrow_book),
        FnAction::new("7", "Return a book", actions::return_book),
        FnAction::new("8", "List all available books", actions::list_available_books),
        FnAction::new(
            "9",
            "List all borrowed books by a member",
            actions::list_borrowed_books,
        ),
    ];

    for entry in entries {
        registry.register(Box::new(entry))?;
    }
    Ok(())
}

/// Show the menu and dispatch choices until the exit command or end of input.
///
/// The store lives only as long as the caller keeps it; nothing is saved.
pub fn run_session(
    registry: &ActionRegistry<CatalogStore>,
    store: &mut CatalogStore,
    settings: &Settings,
    console: &mut Console<'_>,
) -> anyhow::Result<()> {
    tracing::info!(actions = registry.len(), "session started");

    loop {
        render::menu(console.out(), registry, &settings.menu)
            .with_context(|| "failed to render menu")?;

        let Some(choice) = console.read_line()? else {
            tracing::info!("input closed, ending session");
            break;
        };
        if choice == settings.menu.exit_command {
            console.say("Library Closed")?;
            break;
        }

        let mut ctx = ActionCtx {
            settings,
            state: &mut *store,
            console: &mut *console,
        };
        if !registry.dispatch(&choice, &mut ctx)? {
            console.say("Invalid Value")?;
        }
    }

    tracing::info!(
        books = store.book_count(),
        members = store.member_count(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::{BookId, BookStatus, MemberId};
    use std::io::Cursor;

    fn session(script: &str) -> (CatalogStore, String) {
        let mut registry = ActionRegistry::new();
        register_all(&mut registry).unwrap();
        let settings = Settings::default();
        let mut store = CatalogStore::new();

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        {
            let mut console = Console::new(&mut input, &mut output, "m");
            run_session(&registry, &mut store, &settings, &mut console).unwrap();
        }
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn borrow_and_return_through_menu() {
        let (store, out) = session("1\nDune\nHerbert\n2\nAlice\n6\n1\n1\n7\n1\n1\nq\n");

        assert!(out.contains("Book Added Successfully"));
        assert!(out.contains("member added successfully"));
        assert!(out.contains("Book Borrowed Successfully"));
        assert!(out.contains("Book Returned Successfully"));
        assert!(out.ends_with("Library Closed\n"));
        assert_eq!(
            store.book(BookId::new(1)).unwrap().status,
            BookStatus::Available
        );
        assert!(store.member(MemberId::new(1)).unwrap().borrowed.is_empty());
    }

    #[test]
    fn store_errors_are_printed_and_session_continues() {
        let (store, out) = session("2\nAlice\n6\n99\n1\n4\nq\n");

        assert!(out.contains("book with id 99 does not exist"));
        assert!(out.contains("Name:      Alice"));
        assert_eq!(store.member_count(), 1);
    }

    #[test]
    fn bad_member_id_uses_capitalised_noun() {
        let (_, out) = session("3\nzero\nm\nq\n");
        assert!(out.contains("invalid Member id: must be positive integer"));
        assert!(!out.contains("member removed successfully"));
    }

    #[test]
    fn unknown_member_removal_reports_missing_member() {
        let (_, out) = session("3\n8\nq\n");
        assert!(out.contains("member with id 8 does not exist"));
    }

    #[test]
    fn unknown_option_is_reported() {
        let (_, out) = session("42\nq\n");
        assert!(out.contains("Invalid Value"));
    }

    #[test]
    fn sentinel_aborts_whole_action() {
        let (store, out) = session("1\nDune\nm\nq\n");
        assert_eq!(store.book_count(), 0);
        assert!(!out.contains("Book Added Successfully"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (store, out) = session("2\nAlice\n");
        assert_eq!(store.member_count(), 1);
        assert!(!out.contains("Library Closed"));
    }

    #[test]
    fn empty_listings_use_short_messages() {
        let (_, out) = session("4\n8\nq\n");
        assert!(out.contains("No members yet"));
        assert!(out.contains("no available books"));
    }

    #[test]
    fn borrowed_listing_for_unknown_member_prints_error_and_empty_total() {
        let (_, out) = session("9\n3\nq\n");
        assert!(out.contains("member with id 3 does not exist\n"));
        assert!(out.contains("Total:     0"));
    }

    #[test]
    fn removing_borrowed_book_through_menu() {
        let (store, out) = session("1\nDune\nHerbert\n2\nAlice\n6\n1\n1\n5\n1\n9\n1\nq\n");
        assert!(out.contains("Book Removed Successfully"));
        assert_eq!(store.book_count(), 0);
        assert!(store.member(MemberId::new(1)).unwrap().borrowed.is_empty());
    }

    #[test]
    fn remove_member_through_menu_releases_books() {
        let (store, out) = session("1\nDune\nHerbert\n2\nAlice\n6\n1\n1\n3\n1\n8\nq\n");
        assert!(out.contains("member removed successfully"));
        assert!(out.contains("Title:     Dune"));
        assert!(store.book(BookId::new(1)).unwrap().is_available());
    }
}

//! Handlers behind the nine menu entries.
//!
//! Each handler collects its input, makes one call on the store and prints
//! the outcome. A refused operation is printed and the session carries on.

use std::fmt::Display;

use anyhow::Context;
use library_kernel::ActionCtx;

use super::render;
use crate::modules::catalog::{BookId, CatalogStore, MemberId};

type Ctx<'a, 'c> = ActionCtx<'a, 'c, CatalogStore>;

fn prompt_book_id(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<Option<BookId>> {
    Ok(ctx.console.prompt_id("Book ID", "book")?.map(BookId::new))
}

fn prompt_member_id(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<Option<MemberId>> {
    Ok(ctx.console.prompt_id("Member ID", "Member")?.map(MemberId::new))
}

/// Print `success` or the refusal message.
fn report<T, E: Display>(
    ctx: &mut Ctx<'_, '_>,
    result: Result<T, E>,
    success: &str,
) -> anyhow::Result<()> {
    match result {
        Ok(_) => ctx.console.say(success),
        Err(err) => ctx.console.say(err),
    }
}

pub fn add_book(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(title) = ctx.console.prompt_text("Book Title")? else {
        return Ok(());
    };
    let Some(author) = ctx.console.prompt_text("Author Name")? else {
        return Ok(());
    };

    ctx.state.add_book(title, author);
    ctx.console.say("Book Added Successfully")
}

pub fn add_member(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(name) = ctx.console.prompt_text("Member Name")? else {
        return Ok(());
    };

    ctx.state.add_member(name);
    ctx.console.say("member added successfully")
}

pub fn remove_member(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(member_id) = prompt_member_id(ctx)? else {
        return Ok(());
    };

    let result = ctx.state.remove_member(member_id);
    report(ctx, result, "member removed successfully")
}

pub fn list_members(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let members = ctx.state.list_members();
    if members.is_empty() {
        return ctx.console.say("No members yet");
    }

    render::members(ctx.console.out(), &members).with_context(|| "failed to render members")
}

pub fn remove_book(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(book_id) = prompt_book_id(ctx)? else {
        return Ok(());
    };

    ctx.state.remove_book(book_id);
    ctx.console.say("Book Removed Successfully")
}

pub fn borrow_book(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(book_id) = prompt_book_id(ctx)? else {
        return Ok(());
    };
    let Some(member_id) = prompt_member_id(ctx)? else {
        return Ok(());
    };

    let result = ctx.state.borrow_book(book_id, member_id);
    report(ctx, result, "Book Borrowed Successfully")
}

pub fn return_book(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(book_id) = prompt_book_id(ctx)? else {
        return Ok(());
    };
    let Some(member_id) = prompt_member_id(ctx)? else {
        return Ok(());
    };

    let result = ctx.state.return_book(book_id, member_id);
    report(ctx, result, "Book Returned Successfully")
}

pub fn list_available_books(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let books = ctx.state.list_available_books();
    if books.is_empty() {
        return ctx.console.say("no available books");
    }

    render::books(ctx.console.out(), &books).with_context(|| "failed to render books")
}

pub fn list_borrowed_books(ctx: &mut Ctx<'_, '_>) -> anyhow::Result<()> {
    let Some(member_id) = prompt_member_id(ctx)? else {
        return Ok(());
    };

    // An unknown member still gets the (empty) listing after the message.
    let books = match ctx.state.list_borrowed_books(member_id) {
        Ok(books) => books,
        Err(err) => {
            ctx.console.say(err)?;
            Vec::new()
        }
    };
    render::books(ctx.console.out(), &books).with_context(|| "failed to render books")
}

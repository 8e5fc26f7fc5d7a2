//! Plain-text rendering of the menu and of record listings.

use std::io::{self, Write};

use library_kernel::settings::MenuSettings;
use library_kernel::ActionRegistry;

use crate::modules::catalog::{Book, Member};
use crate::utils::{centered, rule};

pub const MENU_TITLE: &str = "Library Management Menu";

const RECORD_RULE_WIDTH: usize = 25;

pub fn menu<S>(
    out: &mut dyn Write,
    registry: &ActionRegistry<S>,
    settings: &MenuSettings,
) -> io::Result<()> {
    let width = settings.width;
    writeln!(out, "{}", rule('=', width))?;
    // Title line carries one space beyond the centring padding.
    writeln!(out, " {}", centered(MENU_TITLE, width))?;
    writeln!(out, "{}", rule('=', width))?;
    for action in registry.actions() {
        writeln!(out, " {}. {:<35}", action.key(), action.label())?;
    }
    writeln!(out, "{}", rule('-', width))?;
    writeln!(out, " {}. Exit", settings.exit_command)?;
    writeln!(out, "{}", rule('=', width))
}

pub fn members(out: &mut dyn Write, members: &[Member]) -> io::Result<()> {
    for member in members {
        writeln!(out, "{}", rule('-', RECORD_RULE_WIDTH))?;
        writeln!(out, "ID:        {:<15}", member.id)?;
        writeln!(out, "Name:      {:<15}", member.name)?;
    }
    footer(out, members.len())
}

pub fn books(out: &mut dyn Write, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", rule('-', RECORD_RULE_WIDTH))?;
        writeln!(out, "ID:        {:<15}", book.id)?;
        writeln!(out, "Title:     {:<15}", book.title)?;
        writeln!(out, "Author:    {:<15}", book.author)?;
    }
    footer(out, books.len())
}

fn footer(out: &mut dyn Write, total: usize) -> io::Result<()> {
    writeln!(out, "{}", rule('-', RECORD_RULE_WIDTH))?;
    writeln!(out, "Total:     {:<15}\n", total)
}

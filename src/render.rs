//! Terminal rendering of a board page.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::board::BoardSnapshot;

/// Writes the cards on the current page as a table, followed by the filter and page status.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_page(mut out: impl io::Write, snapshot: &BoardSnapshot) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Card", "Tags"]);

    for card in snapshot.visible_cards() {
        let position = card
            .rank
            .map_or_else(String::new, |rank| rank.saturating_add(1).to_string());

        builder.push_record([position, card.title.clone(), card.tags.join(", ")]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::first(), Alignment::right());

    writeln!(out, "{table}")?;

    if snapshot.active_tags.is_empty() {
        writeln!(out, "Filters: none")?;
    } else {
        writeln!(out, "Filters: {}", snapshot.active_tags.join(", "))?;
    }

    match snapshot.controls {
        Some(controls) => writeln!(out, "{}", controls.label())?,
        None => writeln!(out, "{} matching cards", snapshot.matched)?,
    }

    Ok(())
}

//! Board preview
//!
//! Loads a fixture board, applies the requested tags and prints one page.
//!
//! Use `-f` to load a fixture set by name
//! Use `-t` to activate a tag (repeatable)
//! Use `-p` to pick a page

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagfilter::{fixtures::Fixture, render::write_page, utils::PreviewArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = PreviewArgs::parse();

    let fixture = match args.path.as_deref() {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::from_set(&args.fixture)?,
    };

    let mut board = fixture.into_board();

    for tag in &args.tags {
        board.toggle_tag(tag);
    }

    while board.page().current_page() < args.page {
        if !board.next_page() {
            break;
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_page(&mut handle, &board.snapshot())?;

    Ok(())
}

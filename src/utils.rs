//! Utils

use clap::Parser;

/// Arguments for the board preview
#[derive(Debug, Parser)]
#[clap(name = "tagfilter", about = "Preview one page of a filtered card board")]
pub struct PreviewArgs {
    /// Fixture set to load from `fixtures/boards`
    #[clap(short, long, default_value = "landing")]
    pub fixture: String,

    /// Path to a fixture file; overrides `--fixture`
    #[clap(long)]
    pub path: Option<String>,

    /// Tag to activate; repeat for more than one
    #[clap(short, long = "tag")]
    pub tags: Vec<String>,

    /// Page to show; stops at the last page
    #[clap(short, long, default_value_t = 1)]
    pub page: usize,
}

//! Leptos Tagfilter Demo Application

use leptos::prelude::*;
use tagfilter::{
    board::{Board, BoardSnapshot},
    fixtures::Fixture,
};

mod cards;
mod filters;
mod pagination;

const BOARD_FIXTURE_YAML: &str = include_str!("../../../fixtures/boards/landing.yml");

/// Parse the bundled fixture into a board.
fn load_board(yaml: &str) -> Result<Board, String> {
    Fixture::from_yaml(yaml)
        .map(Fixture::into_board)
        .map_err(|error| format!("Failed to load board fixture: {error}"))
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match load_board(BOARD_FIXTURE_YAML) {
        Ok(board) => {
            let board = RwSignal::new(board);
            let snapshot = Memo::new(move |_| board.with(Board::snapshot));

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || snapshot.with(match_announcement)}
                    </p>
                    <div class="mx-auto mb-6 max-w-5xl">
                        <h1 class="text-2xl font-semibold tracking-tight">"Lessons"</h1>
                    </div>
                    <div class="mx-auto max-w-5xl">
                        <filters::FilterBar board=board snapshot=snapshot />
                        <cards::CardGrid snapshot=snapshot />
                        <pagination::PaginationBar board=board snapshot=snapshot />
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Lessons"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn match_announcement(snapshot: &BoardSnapshot) -> String {
    let noun = if snapshot.matched == 1 {
        "lesson"
    } else {
        "lessons"
    };

    format!("{} {noun} shown", snapshot.matched)
}

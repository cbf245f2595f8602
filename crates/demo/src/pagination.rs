use leptos::prelude::*;
use tagfilter::board::{Board, BoardSnapshot};

/// Move to the next page.
pub(crate) fn next_page(board: RwSignal<Board>) {
    board.update(|board| {
        board.next_page();
    });
}

/// Move to the previous page.
pub(crate) fn prev_page(board: RwSignal<Board>) {
    board.update(|board| {
        board.prev_page();
    });
}

/// Prev/next buttons with the page indicator. Renders nothing for a single page.
#[component]
pub(crate) fn PaginationBar(
    board: RwSignal<Board>,
    snapshot: Memo<BoardSnapshot>,
) -> impl IntoView {
    move || {
        snapshot.with(|snapshot| snapshot.controls).map_or_else(
            || ().into_any(),
            |controls| {
                view! {
                    <nav class="pagination" aria-label="Lesson pages">
                        <button
                            type="button"
                            class="pagination-button"
                            disabled=controls.prev_disabled
                            on:click=move |_| prev_page(board)
                        >
                            "Prev"
                        </button>
                        <span class="pagination-label">{controls.label()}</span>
                        <button
                            type="button"
                            class="pagination-button"
                            disabled=controls.next_disabled
                            on:click=move |_| next_page(board)
                        >
                            "Next"
                        </button>
                    </nav>
                }
                .into_any()
            },
        )
    }
}

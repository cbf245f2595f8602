use leptos::prelude::*;
use tagfilter::{
    board::{Board, BoardSnapshot},
    controls::{Presence, TagVariant},
};

/// Activate the tag toggle at `index`.
pub(crate) fn activate_toggle(board: RwSignal<Board>, index: usize) {
    board.update(|board| {
        board.activate_toggle(index);
    });
}

/// Activate the clear-filters button.
pub(crate) fn clear_filters(board: RwSignal<Board>) {
    board.update(|board| {
        board.clear_tags();
    });
}

fn clear_button_classes(presence: Presence) -> &'static str {
    match presence {
        Presence::Entering => "clear-filters clear-filters-entering",
        Presence::Exiting => "clear-filters clear-filters-exiting",
        Presence::Shown | Presence::Hidden => "clear-filters",
    }
}

#[component]
fn TagButton(
    board: RwSignal<Board>,
    snapshot: Memo<BoardSnapshot>,
    index: usize,
) -> impl IntoView {
    let toggle = move || snapshot.with(|snapshot| snapshot.toggles.get(index).cloned());
    let is_active = move || toggle().is_some_and(|toggle| toggle.variant == TagVariant::Active);

    view! {
        <button
            type="button"
            class="tag-button"
            class:tag-button-active=is_active
            aria-pressed=move || is_active().to_string()
            on:click=move |_| activate_toggle(board, index)
        >
            {move || toggle().map(|toggle| toggle.label).unwrap_or_default()}
        </button>
    }
}

#[component]
fn ClearFiltersButton(board: RwSignal<Board>, snapshot: Memo<BoardSnapshot>) -> impl IntoView {
    view! {
        <Show when=move || snapshot.with(BoardSnapshot::clear_mounted)>
            <button
                type="button"
                class=move || snapshot.with(|snapshot| clear_button_classes(snapshot.clear))
                disabled=move || !snapshot.with(BoardSnapshot::clear_visible)
                on:click=move |_| clear_filters(board)
            >
                "Clear filters"
            </button>
        </Show>
    }
}

/// Tag toggles followed by the clear-filters button.
#[component]
pub(crate) fn FilterBar(board: RwSignal<Board>, snapshot: Memo<BoardSnapshot>) -> impl IntoView {
    let toggle_count = board.with_untracked(|board| board.toggles().len());

    view! {
        <div class="filter-bar" role="group" aria-label="Filter lessons by tag">
            {(0..toggle_count)
                .map(|index| view! { <TagButton board=board snapshot=snapshot index=index /> })
                .collect_view()}
            <ClearFiltersButton board=board snapshot=snapshot />
        </div>
    }
}

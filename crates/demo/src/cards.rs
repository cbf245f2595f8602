use leptos::prelude::*;
use tagfilter::{
    board::{BoardSnapshot, CardState},
    items::ItemKey,
};

fn card_state(snapshot: &BoardSnapshot, key: ItemKey) -> Option<CardState> {
    snapshot.cards.iter().find(|card| card.key == key).cloned()
}

fn slot_display(card: Option<&CardState>) -> &'static str {
    if card.is_some_and(|card| card.visible) {
        "block"
    } else {
        "none"
    }
}

#[component]
fn CardTile(snapshot: Memo<BoardSnapshot>, card_key: ItemKey) -> impl IntoView {
    let card = move || snapshot.with(|snapshot| card_state(snapshot, card_key));

    view! {
        <div class="card-slot" style:display=move || slot_display(card().as_ref())>
            <article
                class="card"
                data-filtered=move || card().is_some_and(|card| card.filtered).to_string()
            >
                <h3 class="card-title">{move || card().map(|card| card.title).unwrap_or_default()}</h3>
                <ul class="card-tags">
                    {move || {
                        card()
                            .map(|card| card.tags)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|tag| view! { <li class="card-tag">{tag}</li> })
                            .collect_view()
                    }}
                </ul>
            </article>
        </div>
    }
}

/// Every registered card; the page window decides which are displayed.
#[component]
pub(crate) fn CardGrid(snapshot: Memo<BoardSnapshot>) -> impl IntoView {
    view! {
        <div class="card-grid">
            <For
                each=move || {
                    snapshot.with(|snapshot| {
                        snapshot.cards.iter().map(|card| card.key).collect::<Vec<_>>()
                    })
                }
                key=|key| *key
                children=move |key: ItemKey| view! { <CardTile snapshot=snapshot card_key=key /> }
            />
        </div>
    }
}

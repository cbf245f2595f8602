//! Fixture-driven board tests

use testresult::TestResult;

use tagfilter::prelude::*;

#[test]
fn landing_fixture_filters_and_pages() -> TestResult {
    let mut board = Fixture::from_set("landing")?.into_board();

    assert_eq!(board.registry().len(), 20);
    assert_eq!(board.toggles().len(), 5);
    assert_eq!(board.total_pages(), 3);

    let image = board
        .toggles()
        .iter()
        .position(|toggle| toggle.label() == "image")
        .ok_or("expected image toggle")?;

    board.activate_toggle(image);

    assert_eq!(board.matched().len(), 8);
    assert_eq!(board.total_pages(), 1);

    board.toggle_tag("video");

    let snapshot = board.snapshot();

    assert_eq!(snapshot.matched, 14);
    assert_eq!(snapshot.visible_cards().count(), 9);
    assert_eq!(snapshot.active_tags, vec!["image".to_string(), "video".to_string()]);

    board.next_page();

    assert_eq!(board.snapshot().visible_cards().count(), 5);

    Ok(())
}

#[test]
fn landing_fixture_untagged_card_only_shows_unfiltered() -> TestResult {
    let mut board = Fixture::from_set("landing")?.into_board();

    let untagged = board
        .snapshot()
        .cards
        .iter()
        .find(|card| card.tags.is_empty())
        .map(|card| card.key)
        .ok_or("expected untagged card")?;

    assert!(board.matched().is_matched(untagged));

    board.toggle_tag("portrait");

    assert!(!board.matched().is_matched(untagged));

    Ok(())
}

#[test]
fn uniform_fixture_clamps_after_shrink() -> TestResult {
    let mut board = Fixture::from_set("uniform")?.into_board();

    assert!(board.next_page());
    assert_eq!(board.page().current_page(), 2);

    board.toggle_tag("y");

    assert_eq!(board.page().current_page(), 1);
    assert!(board.snapshot().controls.is_none());

    Ok(())
}

//! Acceptance tests: keyboard and mouse navigation over search results.

use crate::client::InMemoryClient;
use crate::model::LayoutMode;
use crate::test_harness::CarouselHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn three_photos() -> InMemoryClient {
    InMemoryClient::new()
        .with_results("lakes", ["l0", "l1", "l2"])
        .with_photo("l0", "https://img.test/l0.jpg")
        .with_photo("l1", "https://img.test/l1.jpg")
        .with_photo("l2", "https://img.test/l2.jpg")
}

#[tokio::test]
async fn results_select_first_photo() {
    let mut h = CarouselHarness::with_layout(three_photos(), LayoutMode::Linear);
    h.search("lakes").await;

    assert_eq!(h.state().selected_index(), 0);
    let offsets: Vec<i32> = h.state().layout().iter().map(|p| p.track_offset()).collect();
    assert_eq!(offsets, vec![24, 8, -8]);
    assert!(h.render_to_string().contains("Photo 1 / 3"));
}

#[tokio::test]
async fn arrows_wrap_in_both_directions() {
    let mut h = CarouselHarness::with_layout(three_photos(), LayoutMode::Linear);
    h.search("lakes").await;

    h.send_key(KeyCode::Left);
    assert_eq!(h.state().selected_index(), 2);

    h.send_key(KeyCode::Right);
    assert_eq!(h.state().selected_index(), 0);
}

#[tokio::test]
async fn tab_and_backtab_step_like_arrows() {
    let mut h = CarouselHarness::with_layout(three_photos(), LayoutMode::Linear);
    h.search("lakes").await;

    h.send_key(KeyCode::Tab);
    assert_eq!(h.state().selected_index(), 1);

    h.send_key_with_mods(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(h.state().selected_index(), 0);
}

#[tokio::test]
async fn click_selects_thumbnail() {
    let mut h = CarouselHarness::with_layout(three_photos(), LayoutMode::Linear);
    h.search("lakes").await;

    assert!(h.click_thumbnail(2));
    assert_eq!(h.state().selected_index(), 2);
    assert!(h.render_to_string().contains("Photo 3 / 3"));
}

#[tokio::test]
async fn circular_track_shows_clones_around_selection() {
    let mut h = CarouselHarness::new(three_photos());
    h.search("lakes").await;

    assert_eq!(h.state().layout().entry_count(), 7);
    assert_eq!(h.visible_thumbnails(), vec![-2, -1, 0, 1, 2]);
}

#[tokio::test]
async fn clicking_clone_shows_photo_it_duplicates() {
    let mut h = CarouselHarness::new(three_photos());
    h.search("lakes").await;

    assert!(h.click_thumbnail(-1));
    assert_eq!(h.state().selected_index(), 2);
    let photo = h.state().selected_photo().unwrap();
    assert_eq!(photo.source_url(), "https://img.test/l2.jpg");
    assert!(h.render_to_string().contains("Photo 3 / 3"));

    h.send_key(KeyCode::Right);
    assert_eq!(h.state().selected_index(), 0);
}

#[tokio::test]
async fn navigation_without_results_is_ignored() {
    let mut h = CarouselHarness::new(three_photos());

    h.send_key(KeyCode::Right);
    h.send_key(KeyCode::End);
    assert_eq!(h.state().selected_index(), 0);
    assert!(h.state().selected_photo().is_none());
}

#[tokio::test]
async fn escape_quits() {
    let mut h = CarouselHarness::new(three_photos());
    assert!(h.send_key(KeyCode::Esc));
}

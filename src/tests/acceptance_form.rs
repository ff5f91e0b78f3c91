//! Acceptance tests for the text area and the form buttons.

use crate::state::{FocusPane, HitTarget};
use crate::test_harness::AcceptanceTestHarness;
use crate::view::form::{CLEAR_LABEL, GENERATE_LABEL, PLACEHOLDER};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn empty_board_shows_placeholder_and_no_grid() {
    let mut harness = AcceptanceTestHarness::new(100, 40);

    let screen = harness.render_to_string();

    assert!(screen.contains(PLACEHOLDER));
    assert!(screen.contains(GENERATE_LABEL));
    assert!(screen.contains(CLEAR_LABEL));
    assert!(screen.contains("No barcodes"));
    assert!(!screen.contains("Number:"), "no cards without entries");
}

#[test]
fn typed_lines_become_cards() {
    let mut harness = AcceptanceTestHarness::new(100, 40);

    harness.type_text("ABC\n\n  123  \nABC");

    assert_eq!(harness.state().entries(), vec!["ABC", "123", "ABC"]);
    let screen = harness.render_to_string();
    assert!(screen.contains("Barcode Data: 123"));
    assert!(screen.contains("Number: 3"), "duplicates are separate entries");
    assert!(screen.contains("3 barcodes · Page 1 of 1"));
}

#[test]
fn letters_type_in_text_area_instead_of_triggering_actions() {
    let mut harness = AcceptanceTestHarness::new(100, 40);

    let quit = harness.send_key(KeyCode::Char('q'));
    harness.type_text("gc?");

    assert!(!quit);
    assert!(harness.is_running());
    assert_eq!(harness.state().buffer.text(), "qgc?");
    assert!(!harness.state().help_visible);
}

#[test]
fn generate_resets_page_and_focuses_grid() {
    let lines = (1..=40).map(|i| format!("ITEM{i}")).collect::<Vec<_>>().join("\n");
    let mut harness = AcceptanceTestHarness::from_text(&lines, 100, 40);
    harness.render_to_string();

    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Char(']'));
    assert_eq!(harness.state().page().get(), 2);

    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().focus, FocusPane::Input);
    harness.send_key_with_mods(KeyCode::Char('g'), KeyModifiers::CONTROL);

    assert_eq!(harness.state().page().get(), 1);
    assert_eq!(harness.state().focus, FocusPane::Grid);
}

#[test]
fn generate_button_click_submits() {
    let mut harness = AcceptanceTestHarness::from_text("ABC", 100, 40);

    assert!(harness.click_on(HitTarget::GenerateButton));

    assert_eq!(harness.state().focus, FocusPane::Grid);
    assert_eq!(harness.state().page().get(), 1);
}

#[test]
fn generate_with_no_entries_keeps_text_area_focused() {
    let mut harness = AcceptanceTestHarness::new(100, 40);

    harness.send_key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(harness.state().focus, FocusPane::Input);
}

#[test]
fn clear_button_empties_buffer_and_grid() {
    let mut harness = AcceptanceTestHarness::from_text("ABC\nDEF", 100, 40);
    assert!(harness.render_to_string().contains("Barcode Data: ABC"));

    assert!(harness.click_on(HitTarget::ClearButton));

    assert_eq!(harness.state().buffer.text(), "");
    assert!(harness.state().entries().is_empty());
    assert_eq!(harness.state().page().get(), 1);
    let screen = harness.render_to_string();
    assert!(screen.contains(PLACEHOLDER));
    assert!(!screen.contains("Barcode Data: ABC"));
}

#[test]
fn ctrl_l_clears_from_text_area() {
    let mut harness = AcceptanceTestHarness::from_text("ABC", 100, 40);

    harness.send_key_with_mods(KeyCode::Char('l'), KeyModifiers::CONTROL);

    assert!(harness.state().buffer.is_empty());
}

#[test]
fn clicking_text_area_takes_focus_back() {
    let mut harness = AcceptanceTestHarness::from_text("ABC", 100, 40);
    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().focus, FocusPane::Grid);

    assert!(harness.click_on(HitTarget::InputArea));

    assert_eq!(harness.state().focus, FocusPane::Input);
}

#[test]
fn paste_inserts_lines_at_cursor() {
    let mut harness = AcceptanceTestHarness::from_text("FIRST\n", 100, 40);

    harness.paste("X1\r\nX2");

    assert_eq!(harness.state().entries(), vec!["FIRST", "X1", "X2"]);
}

#[test]
fn ctrl_c_quits() {
    let mut harness = AcceptanceTestHarness::new(100, 40);

    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}

#[test]
fn q_quits_from_grid() {
    let mut harness = AcceptanceTestHarness::from_text("ABC", 100, 40);
    harness.send_key(KeyCode::Tab);

    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}

//! Tests for the terminal shell: key routing, scrolling and drawing.

use crate::layout::ScrollSlot;
use crate::state::{FocusPane, InputMode};
use crate::test_harness::DashboardHarness;
use crossterm::event::{KeyCode, KeyModifiers};

// ===== Quitting =====

#[test]
fn q_quits() {
    let mut app = DashboardHarness::demo();
    assert!(app.send_key(KeyCode::Char('q')));
    assert!(!app.is_running());
}

#[test]
fn ctrl_c_quits_even_while_typing() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('i'));
    assert!(app.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn q_is_text_while_composing() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('i'));
    app.type_text("q");
    assert!(app.is_running());
    assert_eq!(app.state().controller().draft(), "q");
}

// ===== Focus =====

#[test]
fn tab_and_backtab_cycle_focus() {
    let mut app = DashboardHarness::demo();
    assert_eq!(app.state().focus, FocusPane::Feed);

    app.send_key(KeyCode::Tab);
    assert_eq!(app.state().focus, FocusPane::Stories);

    app.send_key_with_mods(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(app.state().focus, FocusPane::Feed);
}

#[test]
fn number_keys_jump_to_widgets() {
    let mut app = DashboardHarness::demo();
    for (key, pane) in [
        ('0', FocusPane::Sidebar),
        ('2', FocusPane::Stories),
        ('3', FocusPane::Groups),
        ('4', FocusPane::Contacts),
        ('1', FocusPane::Feed),
    ] {
        app.send_key(KeyCode::Char(key));
        assert_eq!(app.state().focus, pane);
    }
}

// ===== Feed interactions =====

#[test]
fn l_likes_selected_post_and_updates_stats_line() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('l'));

    let screen = app.render_to_string();
    assert!(screen.contains("126 Likes  18 Comments  7 Shares"));
    assert!(screen.contains("You liked Julia Fillory's post (126 likes)"));
}

#[test]
fn enter_on_second_post_likes_it() {
    let mut app = DashboardHarness::demo();
    app.send_keys(&[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.state().controller().posts()[1].stats().likes, 231);
}

#[test]
fn enter_on_story_marks_it_viewed() {
    let mut app = DashboardHarness::demo();
    app.send_keys(&[KeyCode::Char('2'), KeyCode::Enter]);

    assert!(app.state().controller().stories()[0].is_viewed());
    assert!(app.render_to_string().contains("Viewing Laura Croft's story"));
}

#[test]
fn enter_on_group_requests_to_join() {
    let mut app = DashboardHarness::demo();
    app.send_keys(&[KeyCode::Char('3'), KeyCode::Char('j'), KeyCode::Enter]);
    assert!(app
        .render_to_string()
        .contains("Asked to join Dexter Morgan Fans"));
}

#[test]
fn enter_on_contact_clears_unread() {
    let mut app = DashboardHarness::demo();
    app.send_keys(&[KeyCode::Char('4'), KeyCode::Enter]);

    assert_eq!(
        app.state().controller().visible_contacts()[0].unread_count(),
        0
    );
    assert!(app
        .render_to_string()
        .contains("Opened chat with Alice Johnson"));
}

#[test]
fn esc_dismisses_latest_notice() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('l'));
    app.send_key(KeyCode::Esc);

    assert_eq!(app.state().notices().latest(), None);
    assert!(app.render_to_string().contains("Tab focus"));
}

// ===== Composer =====

#[test]
fn compose_and_submit_a_post() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('i'));
    app.type_text("Hello world");
    app.send_key(KeyCode::Enter);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.state().controller().draft(), "");
    assert!(app.render_to_string().contains("Posted: Hello world"));
}

#[test]
fn blank_submit_keeps_composer_open() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('i'));
    app.type_text("   ");
    app.send_key(KeyCode::Enter);

    assert!(matches!(app.state().input_mode, InputMode::EditingDraft(_)));
    assert_eq!(app.state().notices().latest(), None);

    app.send_key(KeyCode::Esc);
    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.state().controller().draft(), "   ");
}

#[test]
fn backspace_and_cursor_keys_edit_the_draft() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('i'));
    app.type_text("helo");
    app.send_key(KeyCode::Left);
    app.type_text("l");
    app.send_key(KeyCode::End);
    app.send_key(KeyCode::Backspace);

    assert_eq!(app.state().controller().draft(), "hell");
}

#[test]
fn composer_placeholder_uses_first_name() {
    let mut app = DashboardHarness::demo();
    assert!(app
        .render_to_string()
        .contains("What's on your mind, Olenna?"));
}

// ===== Contact filter =====

#[test]
fn slash_filters_contacts_while_typing() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('/'));
    app.type_text("ali");

    let screen = app.render_to_string();
    assert!(screen.contains("Alice Johnson"));
    assert!(!screen.contains("Bob Williams"));
    assert_eq!(app.state().controller().visible_contacts().len(), 1);
}

#[test]
fn enter_keeps_filter_and_esc_clears_it() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('/'));
    app.type_text("ali");
    app.send_key(KeyCode::Enter);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.state().controller().contact_filter(), "ali");

    app.send_key(KeyCode::Esc);
    assert_eq!(app.state().controller().contact_filter(), "");
    assert_eq!(app.state().controller().visible_contacts().len(), 6);
}

#[test]
fn unmatched_filter_shows_no_contacts_found() {
    let mut app = DashboardHarness::demo();
    app.send_key(KeyCode::Char('/'));
    app.type_text("zzz");
    assert!(app.render_to_string().contains("No contacts found."));
}

// ===== Sidebar =====

#[test]
fn sidebar_enter_changes_active_path() {
    let mut app = DashboardHarness::demo();
    app.send_keys(&[KeyCode::Char('0'), KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.state().nav.active_path(), "/messenger");
    assert!(app.render_to_string().contains("▸ Messenger"));
}

#[test]
fn e_toggles_explore_section() {
    let mut app = DashboardHarness::demo();
    assert!(app.render_to_string().contains("See More..."));

    app.send_key(KeyCode::Char('e'));
    let screen = app.render_to_string();
    assert!(screen.contains("See Less"));
    assert!(screen.contains("Memories"));
}

// ===== Scrolling =====

#[test]
fn page_down_scrolls_only_the_main_column() {
    let mut app = DashboardHarness::demo_with_size(120, 20);
    app.render_to_string();
    app.send_key(KeyCode::PageDown);
    app.render_to_string();

    // 17 visible rows, half a page is 8.
    assert_eq!(app.state().scroll.offset(ScrollSlot::Main), 8);
    assert_eq!(app.state().scroll.offset(ScrollSlot::Rail), 0);
}

#[test]
fn page_up_never_goes_above_top() {
    let mut app = DashboardHarness::demo_with_size(120, 20);
    app.send_key(KeyCode::PageUp);
    app.render_to_string();
    assert_eq!(app.state().scroll.offset(ScrollSlot::Main), 0);
}

#[test]
fn jump_to_bottom_of_rail_is_clamped_to_content() {
    let mut app = DashboardHarness::demo_with_size(120, 20);
    app.send_key(KeyCode::Char('4'));
    app.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    let screen = app.render_to_string();

    // 39 rail rows, 17 visible.
    assert_eq!(app.state().scroll.offset(ScrollSlot::Rail), 22);
    assert_eq!(app.state().scroll.offset(ScrollSlot::Main), 0);
    assert!(screen.contains("Fiona Gallagher"));
}

#[test]
fn focusing_contacts_scrolls_first_contact_into_view() {
    let mut app = DashboardHarness::demo_with_size(120, 20);
    app.send_key(KeyCode::Char('4'));
    let screen = app.render_to_string();

    // Alice's card occupies rail rows 27..29.
    assert_eq!(app.state().scroll.offset(ScrollSlot::Rail), 12);
    assert!(screen.contains("Alice Johnson"));
}

#[test]
fn g_returns_to_top() {
    let mut app = DashboardHarness::demo_with_size(120, 20);
    app.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    app.render_to_string();
    assert!(app.state().scroll.offset(ScrollSlot::Main) > 0);

    app.send_key(KeyCode::Char('g'));
    app.render_to_string();
    assert_eq!(app.state().scroll.offset(ScrollSlot::Main), 0);
    assert_eq!(app.state().selection.feed, 0);
}

// ===== Resizing =====

#[test]
fn resize_to_tiny_terminal_still_draws_sidebar_on_top() {
    let mut app = DashboardHarness::demo();
    app.resize(50, 20);
    app.render_to_string();
    assert_eq!(app.cell(0, 0), "O");
    assert_eq!(app.cell(27, 5), "│");
}

#[test]
fn resize_back_restores_main_column() {
    let mut app = DashboardHarness::demo();
    app.resize(40, 10);
    app.render_to_string();
    app.resize(120, 40);
    assert!(app.render_to_string().contains("Create Post"));
}

//! Property-based tests for the feed controller and the dashboard shell.
//!
//! Controller properties run against generated collections; shell
//! properties drive the harness with generated key sequences and observe
//! state only.

use crate::collections::Collections;
use crate::model::{ChatContact, ContactId, Person, Post, PostId, PostStats, SeedData, StoryId};
use crate::state::{FeedController, NullPresenter, RecordingPresenter};
use crate::test_harness::DashboardHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

fn arb_stats() -> impl Strategy<Value = PostStats> {
    (0u32..100_000, 0u32..10_000, 0u32..10_000)
        .prop_map(|(likes, comments, shares)| PostStats::new(likes, comments, shares))
}

fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(arb_stats(), 1..6).prop_map(|stats| {
        stats
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Post::new(
                    PostId::new(format!("p{i}")).unwrap(),
                    Person::new(format!("Author {i}"), "a.png"),
                    "now",
                )
                .with_stats(s)
            })
            .collect()
    })
}

fn arb_contacts() -> impl Strategy<Value = Vec<ChatContact>> {
    prop::collection::vec(("[A-Za-z]{1,8}( [A-Za-z]{1,8})?", 0u32..50), 0..10).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, unread))| {
                    ChatContact::new(ContactId::new(format!("c{i}")).unwrap(), name, "c.png", i % 2 == 0)
                        .with_unread(unread)
                })
                .collect()
        },
    )
}

fn controller_with(posts: Vec<Post>, contacts: Vec<ChatContact>) -> FeedController<RecordingPresenter> {
    FeedController::new(
        Collections::new(posts, Vec::new(), Vec::new(), contacts),
        RecordingPresenter::new(),
    )
}

/// Keys that never quit and never leave the dashboard in a text field for long.
fn arb_navigation_key() -> impl Strategy<Value = (KeyCode, KeyModifiers)> {
    let none = KeyModifiers::NONE;
    prop_oneof![
        Just((KeyCode::Char('j'), none)),
        Just((KeyCode::Char('k'), none)),
        Just((KeyCode::Char('g'), none)),
        Just((KeyCode::Char('G'), KeyModifiers::SHIFT)),
        Just((KeyCode::PageDown, none)),
        Just((KeyCode::PageUp, none)),
        Just((KeyCode::Tab, none)),
        Just((KeyCode::BackTab, KeyModifiers::SHIFT)),
        Just((KeyCode::Char('0'), none)),
        Just((KeyCode::Char('2'), none)),
        Just((KeyCode::Char('3'), none)),
        Just((KeyCode::Char('4'), none)),
        Just((KeyCode::Enter, none)),
        Just((KeyCode::Char('l'), none)),
        Just((KeyCode::Char('e'), none)),
        Just((KeyCode::Esc, none)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // ===== Likes =====

    #[test]
    fn like_n_times_adds_exactly_n(posts in arb_posts(), pick in any::<prop::sample::Index>(), n in 0usize..25) {
        let target = pick.get(&posts).id().clone();
        let before = pick.get(&posts).stats();
        let mut controller = controller_with(posts, Vec::new());

        for _ in 0..n {
            prop_assert!(controller.like(&target));
        }

        let after = controller.collections().post(&target).unwrap().stats();
        prop_assert_eq!(after.likes, before.likes + n as u32);
        prop_assert_eq!(after.comments, before.comments);
        prop_assert_eq!(after.shares, before.shares);
        prop_assert_eq!(controller.presenter().updates().len(), n);
    }

    #[test]
    fn like_leaves_other_posts_untouched(posts in arb_posts(), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&posts).id().clone();
        let mut controller = controller_with(posts.clone(), Vec::new());
        controller.like(&target);

        for (old, new) in posts.iter().zip(controller.posts().iter()) {
            prop_assert_eq!(old.id(), new.id());
            if old.id() != &target {
                prop_assert_eq!(old, new);
            }
        }
    }

    // ===== Contact filter =====

    #[test]
    fn filter_returns_exactly_the_matching_contacts_in_order(contacts in arb_contacts(), query in "[a-zA-Z ]{0,3}") {
        let controller = FeedController::new(
            Collections::new(Vec::new(), Vec::new(), Vec::new(), contacts.clone()),
            NullPresenter,
        );

        let expected: Vec<&str> = contacts
            .iter()
            .map(ChatContact::display_name)
            .filter(|name| name.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        let filtered = controller.filter_contacts(&query);
        let actual: Vec<&str> = filtered.iter().map(ChatContact::display_name).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn empty_filter_returns_everything(contacts in arb_contacts()) {
        let controller = controller_with(Vec::new(), contacts.clone());
        prop_assert_eq!(controller.filter_contacts("").to_vec(), contacts);
    }

    // ===== Unread counts =====

    #[test]
    fn unread_count_is_clamped_at_zero(contacts in arb_contacts(), pick in any::<prop::sample::Index>(), delta in -1_000i64..1_000) {
        prop_assume!(!contacts.is_empty());
        let target = pick.get(&contacts).id().clone();
        let start = i64::from(pick.get(&contacts).unread_count());
        let mut controller = controller_with(Vec::new(), contacts);

        controller.update_unread_count(&target, delta);

        let unread = controller.collections().contact(&target).unwrap().unread_count();
        prop_assert_eq!(i64::from(unread), (start + delta).max(0));
    }

    // ===== Drafts =====

    #[test]
    fn blank_submissions_never_emit(draft in "[a-z]{0,8}", blank in "[ \t\n]{0,6}") {
        let mut controller = controller_with(Vec::new(), Vec::new());
        controller.compose_draft(draft.clone());
        let updates = controller.presenter().updates().len();

        prop_assert_eq!(controller.submit_post(&blank), None);
        prop_assert_eq!(controller.draft(), draft.as_str());
        prop_assert_eq!(controller.presenter().updates().len(), updates);
    }

    // ===== Shell =====

    #[test]
    fn selection_stays_in_bounds_under_any_key_sequence(keys in prop::collection::vec(arb_navigation_key(), 0..40)) {
        let mut app = DashboardHarness::demo_with_size(100, 24);
        for (code, mods) in keys {
            app.send_key_with_mods(code, mods);
            app.render_to_string();

            let state = app.state();
            let len = state.focused_len();
            prop_assert!(
                state.focused_index() < len.max(1),
                "index {} out of {} in {:?}",
                state.focused_index(),
                len,
                state.focus
            );
        }
        prop_assert!(app.is_running());
    }
}

#[test]
fn viewing_a_story_twice_equals_viewing_once() {
    let seed = SeedData::demo().unwrap();
    let collections = Collections::from_seed(seed);
    let id = StoryId::new("s1").unwrap();

    let once = collections.mark_story_viewed(&id);
    let twice = once.mark_story_viewed(&id);
    assert_eq!(once, twice);
}

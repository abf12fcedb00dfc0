//! Integration test: a presenter written outside the crate receives pushes.

use feedshell::collections::Collections;
use feedshell::config::ResolvedConfig;
use feedshell::integration::initial_state;
use feedshell::model::{ContactId, PostId, SeedData};
use feedshell::state::{Action, FeedController, FeedEvent, FeedSnapshot, Outcome, Presenter};

/// Counts pushes and remembers the like count of the first post.
#[derive(Default)]
struct Tally {
    pushes: usize,
    first_post_likes: Vec<u32>,
    events: Vec<FeedEvent>,
}

impl Presenter for Tally {
    fn present(&mut self, snapshot: &FeedSnapshot, event: &FeedEvent) {
        self.pushes += 1;
        if let Some(post) = snapshot.posts().first() {
            self.first_post_likes.push(post.stats().likes);
        }
        self.events.push(event.clone());
    }
}

fn controller() -> FeedController<Tally> {
    let seed = SeedData::demo().expect("demo seed is valid");
    FeedController::new(Collections::from_seed(seed), Tally::default())
}

#[test]
fn every_applied_action_pushes_exactly_once() {
    let mut controller = controller();
    let post = PostId::new("1").unwrap();

    assert_eq!(controller.dispatch(Action::Like(post.clone())), Outcome::Applied);
    assert_eq!(controller.dispatch(Action::Like(post)), Outcome::Applied);

    let tally = controller.presenter();
    assert_eq!(tally.pushes, 2);
    assert_eq!(tally.first_post_likes, vec![126, 127]);
}

#[test]
fn ignored_actions_push_nothing() {
    let mut controller = controller();

    let outcome = controller.dispatch(Action::OpenContact(ContactId::new("nobody").unwrap()));
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(controller.dispatch(Action::SubmitPost("  ".to_string())), Outcome::NotSubmitted);

    assert_eq!(controller.presenter().pushes, 0);
}

#[test]
fn submitted_post_event_carries_the_text() {
    let mut controller = controller();
    controller.dispatch(Action::ComposeDraft("hello".to_string()));
    controller.dispatch(Action::SubmitDraft);

    assert_eq!(controller.draft(), "");
    let last = controller.presenter().events.last().expect("one push per action");
    match last {
        FeedEvent::PostSubmitted { text } => assert_eq!(text.as_str(), "hello"),
        other => panic!("Expected PostSubmitted, got {other:?}"),
    }
}

#[test]
fn initial_state_is_usable_without_a_terminal() {
    let mut state = initial_state(&ResolvedConfig::default(), None).expect("demo seed is valid");
    state.like_selected();
    assert_eq!(state.controller().posts()[0].stats().likes, 126);
    assert_eq!(
        state.notices().latest(),
        Some("You liked Julia Fillory's post (126 likes)")
    );
}

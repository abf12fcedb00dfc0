//! Main column: the post composer followed by the news feed.

use crate::model::Post;
use crate::state::{AppState, FocusPane, InputMode};
use crate::view::constants::{AVATAR_WIDTH, CARD_GAP_ROWS};
use crate::view::helpers::{input_spans, truncate_to_width, wrap_words, ColumnContent};
use crate::view::styles::FeedStyles;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Shown in place of posts when the feed is empty.
pub const EMPTY_FEED: &str = "No posts yet.";

/// Inert attachment actions under the composer.
const COMPOSER_ACTIONS: &str = "Photo/Video  Tag Friends  List";

/// Build the main column for a content width of `width` cells.
pub fn feed_column(state: &AppState, styles: &FeedStyles, width: usize) -> ColumnContent {
    let mut column = ColumnContent::new();

    let composer_highlight = (state.focus == FocusPane::Composer).then_some(styles.selected);
    column.push_item(
        FocusPane::Composer,
        0,
        composer_lines(state, styles, width),
        composer_highlight,
    );

    let posts = state.controller().posts();
    if posts.is_empty() {
        column.push_blank();
        column.push_lines([Line::from(Span::styled(EMPTY_FEED, styles.dim))]);
        return column;
    }

    for (index, post) in posts.iter().enumerate() {
        for _ in 0..CARD_GAP_ROWS {
            column.push_blank();
        }
        let selected = state.focus == FocusPane::Feed && state.selection.feed == index;
        column.push_item(
            FocusPane::Feed,
            index,
            post_lines(post, styles, width),
            selected.then_some(styles.selected),
        );
    }

    column
}

fn composer_lines(state: &AppState, styles: &FeedStyles, width: usize) -> Vec<Line<'static>> {
    let user = state.user();
    let avatar = Span::styled(format!("{} ", user.person().initials()), styles.dim);
    let text_width = width.saturating_sub(AVATAR_WIDTH);

    let input_line = match &state.input_mode {
        InputMode::EditingDraft(input) => {
            let mut spans = vec![avatar];
            spans.extend(input_spans(input, Style::default(), styles.cursor));
            Line::from(spans)
        }
        _ if !state.controller().draft().is_empty() => Line::from(vec![
            avatar,
            Span::raw(truncate_to_width(state.controller().draft(), text_width)),
        ]),
        _ => Line::from(vec![
            avatar,
            Span::styled(
                truncate_to_width(&user.composer_prompt(), text_width),
                styles.dim,
            ),
        ]),
    };

    vec![
        Line::from(Span::styled("Create Post", styles.heading)),
        input_line,
        Line::from(Span::styled(
            truncate_to_width(COMPOSER_ACTIONS, width),
            styles.dim,
        )),
    ]
}

/// One post card: author, who/where, timestamp, body, attachments, stats.
pub fn post_lines(post: &Post, styles: &FeedStyles, width: usize) -> Vec<Line<'static>> {
    let indent = " ".repeat(AVATAR_WIDTH);
    let indented_width = width.saturating_sub(AVATAR_WIDTH);
    let author = post.author();

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", author.initials()), styles.dim),
        Span::styled(
            truncate_to_width(author.name(), indented_width),
            styles.emphasis,
        ),
    ])];

    let context = [
        post.tagged_friends_label(),
        post.map().map(|map| format!("• {}", map.location())),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");
    if !context.is_empty() {
        lines.extend(
            wrap_words(&context, indented_width)
                .into_iter()
                .map(|l| Line::from(format!("{indent}{l}"))),
        );
    }

    lines.push(Line::from(Span::styled(
        format!("{indent}{}", post.timestamp_label()),
        styles.dim,
    )));

    if let Some(content) = post.content() {
        lines.extend(wrap_words(content, width).into_iter().map(Line::from));
    }
    if post.image_ref().is_some() {
        lines.push(Line::from(Span::styled("[photo]", styles.dim)));
    }
    if let Some(map) = post.map() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("[map] {}", map.location()), width),
            styles.dim,
        )));
    }

    lines.push(Line::from(truncate_to_width(&stats_label(post), width)));
    lines
}

/// `N Likes  N Comments  N Shares`
pub fn stats_label(post: &Post) -> String {
    let stats = post.stats();
    format!(
        "{} Likes  {} Comments  {} Shares",
        stats.likes, stats.comments, stats.shares
    )
}

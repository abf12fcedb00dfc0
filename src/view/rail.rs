//! Right utility rail: stories, suggested groups and chat contacts.

use crate::model::{ChatContact, Group, Story, MAX_VISIBLE_GROUP_AVATARS};
use crate::state::{AppState, FocusPane, InputMode};
use crate::view::constants::{
    AVATAR_WIDTH, CARD_GAP_ROWS, GROUP_AVATAR_MARKER, UNVIEWED_MARKER, VIEWED_MARKER,
};
use crate::view::helpers::{input_spans, truncate_to_width, ColumnContent};
use crate::view::styles::FeedStyles;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Shown under the chat search box when the filter matches nobody.
pub const NO_CONTACTS: &str = "No contacts found.";

/// Placeholder of the chat search box.
pub const CONTACT_SEARCH_PLACEHOLDER: &str = "Search contacts (/)";

/// Build the rail column for a content width of `width` cells.
pub fn rail_column(state: &AppState, styles: &FeedStyles, width: usize) -> ColumnContent {
    let mut column = ColumnContent::new();
    let highlight = |pane: FocusPane, index: usize, selected: usize| {
        (state.focus == pane && index == selected).then_some(styles.selected)
    };

    column.push_lines([
        heading("Stories", styles),
        Line::from(Span::styled("+ Add to Your Story", styles.dim)),
    ]);
    for (index, story) in state.controller().stories().iter().enumerate() {
        column.push_item(
            FocusPane::Stories,
            index,
            vec![story_line(story, styles, width)],
            highlight(FocusPane::Stories, index, state.selection.story),
        );
    }

    column.push_blank();
    column.push_lines([Line::from(vec![
        Span::styled("Suggested Groups", styles.heading),
        Span::styled("  See All", styles.dim),
    ])]);
    for (index, group) in state.controller().groups().iter().enumerate() {
        if index > 0 {
            for _ in 0..CARD_GAP_ROWS {
                column.push_blank();
            }
        }
        column.push_item(
            FocusPane::Groups,
            index,
            group_lines(group, styles, width),
            highlight(FocusPane::Groups, index, state.selection.group),
        );
    }

    column.push_blank();
    column.push_lines([heading("Chats", styles), search_line(state, styles, width)]);
    let contacts = state.controller().visible_contacts();
    if contacts.is_empty() {
        column.push_lines([Line::from(Span::styled(NO_CONTACTS, styles.dim))]);
    }
    for (index, contact) in contacts.iter().enumerate() {
        column.push_item(
            FocusPane::Contacts,
            index,
            contact_lines(contact, styles, width),
            highlight(FocusPane::Contacts, index, state.selection.contact),
        );
    }

    column
}

fn heading(title: &'static str, styles: &FeedStyles) -> Line<'static> {
    Line::from(Span::styled(title, styles.heading))
}

/// `● LA Laura Croft`; the marker is hollow once the story has been viewed.
fn story_line(story: &Story, styles: &FeedStyles, width: usize) -> Line<'static> {
    let (marker, marker_style) = if story.is_viewed() {
        (VIEWED_MARKER, styles.dim)
    } else {
        (UNVIEWED_MARKER, styles.online)
    };
    let name_width = width.saturating_sub(2 + AVATAR_WIDTH);
    Line::from(vec![
        Span::styled(format!("{marker} "), marker_style),
        Span::styled(format!("{} ", story.initials()), styles.dim),
        Span::raw(truncate_to_width(story.user_name(), name_width)),
    ])
}

/// Group card: name, `members • category`, avatar stack with `+N` badge,
/// then the Join and (inert) Visit actions.
fn group_lines(group: &Group, styles: &FeedStyles, width: usize) -> Vec<Line<'static>> {
    let stack = group.avatar_stack(MAX_VISIBLE_GROUP_AVATARS);
    let mut avatars = vec![Span::raw(GROUP_AVATAR_MARKER.repeat(stack.visible.len()))];
    if let Some(badge) = stack.badge() {
        avatars.push(Span::raw(" "));
        avatars.push(Span::styled(badge, styles.badge));
    }
    avatars.push(Span::styled("  Join  Visit", styles.dim));

    vec![
        Line::from(Span::styled(
            truncate_to_width(group.name(), width),
            styles.emphasis,
        )),
        Line::from(Span::styled(
            truncate_to_width(&group.subtitle(), width),
            styles.dim,
        )),
        Line::from(avatars),
    ]
}

fn search_line(state: &AppState, styles: &FeedStyles, width: usize) -> Line<'static> {
    match &state.input_mode {
        InputMode::EditingFilter(input) => {
            let mut spans = vec![Span::raw("Search: ")];
            spans.extend(input_spans(input, Style::default(), styles.cursor));
            Line::from(spans)
        }
        _ if !state.controller().contact_filter().is_empty() => Line::from(vec![
            Span::raw("Search: "),
            Span::styled(
                truncate_to_width(state.controller().contact_filter(), width.saturating_sub(8)),
                styles.emphasis,
            ),
        ]),
        _ => Line::from(Span::styled(
            truncate_to_width(CONTACT_SEARCH_PLACEHOLDER, width),
            styles.dim,
        )),
    }
}

/// Contact row plus its last message. The unread badge appears only when
/// there is something unread.
fn contact_lines(contact: &ChatContact, styles: &FeedStyles, width: usize) -> Vec<Line<'static>> {
    let (dot, dot_style) = if contact.is_online() {
        (UNVIEWED_MARKER, styles.online)
    } else {
        (VIEWED_MARKER, styles.dim)
    };
    let badge = contact
        .has_unread()
        .then(|| format!(" {} ", contact.unread_count()));
    let badge_width = badge.as_deref().map_or(0, |b| b.width() + 1);
    let name_width = width.saturating_sub(2 + AVATAR_WIDTH + badge_width);

    let mut spans = vec![
        Span::styled(format!("{dot} "), dot_style),
        Span::styled(format!("{} ", contact.initials()), styles.dim),
        Span::raw(truncate_to_width(contact.display_name(), name_width)),
    ];
    if let Some(badge) = badge {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badge, styles.badge));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(message) = contact.last_message() {
        let summary = match contact.last_message_time() {
            Some(time) => format!("{message} · {time}"),
            None => message.to_string(),
        };
        let indent = 2 + AVATAR_WIDTH;
        lines.push(Line::from(Span::styled(
            format!(
                "{}{}",
                " ".repeat(indent),
                truncate_to_width(&summary, width.saturating_sub(indent))
            ),
            styles.dim,
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeedData;
    use crate::state::{text_input, Action, DEFAULT_NOTICE_CAPACITY};
    use crate::view::styles::ColorConfig;

    fn styles() -> FeedStyles {
        FeedStyles::with_color_config(ColorConfig::fixed(false))
    }

    fn state() -> AppState {
        AppState::new(SeedData::demo().unwrap(), DEFAULT_NOTICE_CAPACITY)
    }

    fn text(state: &AppState, width: usize) -> Vec<String> {
        rail_column(state, &styles(), width)
            .lines()
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn stories_start_with_add_entry_and_mark_viewed() {
        let lines = text(&state(), 35);
        assert_eq!(lines[0], "Stories");
        assert_eq!(lines[1], "+ Add to Your Story");
        assert_eq!(lines[2], "● LA Laura Croft");
        assert_eq!(lines[3], "○ JA James Bond");
    }

    #[test]
    fn viewing_a_story_hollows_its_marker() {
        let mut state = state();
        let id = state.controller().stories()[0].id().clone();
        state.dispatch(Action::ViewStory(id));
        assert_eq!(text(&state, 35)[2], "○ LA Laura Croft");
    }

    #[test]
    fn group_card_shows_members_category_and_overflow_badge() {
        let lines = text(&state(), 35);
        assert!(lines.contains(&"React Developers Community".to_string()));
        assert!(lines.contains(&"12,050 members • Technology".to_string()));
        assert!(lines.contains(&"Suggested Groups  See All".to_string()));
        assert!(lines.contains(&"◉◉◉◉ +1  Join  Visit".to_string()));
        assert!(lines.contains(&"◉◉◉  Join  Visit".to_string()));
    }

    #[test]
    fn unread_badge_only_when_unread() {
        let lines = text(&state(), 35);
        assert!(lines.contains(&"● AL Alice Johnson  2 ".to_string()));
        assert!(lines.contains(&"○ BO Bob Williams".to_string()));
    }

    #[test]
    fn opening_a_chat_removes_its_badge() {
        let mut state = state();
        let id = state.controller().visible_contacts()[0].id().clone();
        state.dispatch(Action::OpenContact(id));
        assert!(text(&state, 35).contains(&"● AL Alice Johnson".to_string()));
    }

    #[test]
    fn last_message_is_shown_with_time() {
        let lines = text(&state(), 35);
        assert!(lines.contains(&"     Hey, are you free for a call?…".to_string()));
        assert!(lines.contains(&"     Sounds good! · 1h".to_string()));
    }

    #[test]
    fn filter_with_no_match_says_no_contacts_found() {
        let mut state = state();
        state.dispatch(Action::SetContactFilter("zzz".to_string()));
        let lines = text(&state, 35);
        assert!(lines.contains(&NO_CONTACTS.to_string()));
        assert!(lines.contains(&"Search: zzz".to_string()));
    }

    #[test]
    fn search_box_shows_placeholder_then_cursor() {
        let mut state = state();
        assert!(text(&state, 35).contains(&CONTACT_SEARCH_PLACEHOLDER.to_string()));

        state.start_contact_filter();
        state.edit_input(|i| text_input::insert_char(i, 'a'));
        assert!(text(&state, 35).contains(&"Search: a ".to_string()));
    }

    #[test]
    fn anchors_cover_every_rail_item() {
        let state = state();
        let column = rail_column(&state, &styles(), 35);
        for i in 0..5 {
            assert!(column.anchor(FocusPane::Stories, i).is_some());
        }
        for i in 0..4 {
            assert!(column.anchor(FocusPane::Groups, i).is_some());
        }
        for i in 0..6 {
            assert!(column.anchor(FocusPane::Contacts, i).is_some());
        }
        assert_eq!(column.anchor(FocusPane::Contacts, 5).unwrap().end, column.len());
    }
}

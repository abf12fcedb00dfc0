//! Fixed demo dataset the session is seeded from.
//!
//! Nothing here is global state: [`SeedData::demo`] builds a fresh value that
//! the caller hands to `Collections::from_seed`.

use super::contact::ChatContact;
use super::group::Group;
use super::identifiers::{ContactId, GroupId, InvalidEntityId, PostId, StoryId};
use super::person::{Person, UserProfile};
use super::post::{MapAttachment, Post, PostStats};
use super::story::Story;

/// Everything the dashboard shows at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    /// The signed-in user.
    pub user: UserProfile,
    /// Feed posts, newest first.
    pub posts: Vec<Post>,
    /// Story tiles.
    pub stories: Vec<Story>,
    /// Suggested groups.
    pub groups: Vec<Group>,
    /// Chat contacts.
    pub contacts: Vec<ChatContact>,
}

fn placeholder(size: &str, text: &str) -> String {
    format!("https://via.placeholder.com/{size}?text={text}")
}

impl SeedData {
    /// The built-in demo session.
    ///
    /// # Errors
    /// Only if one of the literal ids were empty, which the tests rule out.
    pub fn demo() -> Result<Self, InvalidEntityId> {
        Ok(Self {
            user: demo_user(),
            posts: demo_posts()?,
            stories: demo_stories()?,
            groups: demo_groups()?,
            contacts: demo_contacts()?,
        })
    }

    /// An empty session for the given user.
    pub fn empty(user: UserProfile) -> Self {
        Self {
            user,
            posts: Vec::new(),
            stories: Vec::new(),
            groups: Vec::new(),
            contacts: Vec::new(),
        }
    }
}

/// The default signed-in user.
pub fn demo_user() -> UserProfile {
    UserProfile::new(
        Person::new("Olenna Mason", placeholder("40", "OM")),
        "/profile/olenna",
    )
}

fn demo_posts() -> Result<Vec<Post>, InvalidEntityId> {
    Ok(vec![
        Post::new(
            PostId::new("1")?,
            Person::new("Julia Fillory", placeholder("40", "JF")),
            "2 hrs ago",
        )
        .with_content(
            "Checking out some new stores downtown! It was an amazing experience, found some \
             great deals. Highly recommend visiting the new city center mall.",
        )
        .with_map(MapAttachment::new(
            "Raleigh, North Carolina",
            placeholder("600x300", "Map+of+Raleigh"),
        ))
        .with_stats(PostStats::new(125, 18, 7))
        .with_tagged_friends(vec![
            Person::new("Bryan Durand", placeholder("30", "BD")),
            Person::new("Anna Lee", placeholder("30", "AL")),
        ]),
        Post::new(
            PostId::new("2")?,
            Person::new("Alex Thompson", placeholder("40", "AT")),
            "5 hrs ago",
        )
        .with_content(
            "Just had a wonderful picnic at Green Valley Park. The weather was perfect! \
             #picnic #nature",
        )
        .with_image(placeholder("600x400", "Picnic+Photo"))
        .with_stats(PostStats::new(230, 45, 12)),
        Post::new(
            PostId::new("3")?,
            Person::new("Tech Weekly", placeholder("40", "TW")),
            "1 day ago",
        )
        .with_content(
            "Explore the future of AI in our latest article. We dive deep into new models and \
             their potential impact on society. Link in bio! #AI #FutureTech",
        )
        .with_stats(PostStats::new(88, 12, 20)),
    ])
}

fn demo_stories() -> Result<Vec<Story>, InvalidEntityId> {
    let story = |id: &str, name: &str, initials: &str, n: u32| -> Result<Story, InvalidEntityId> {
        Ok(Story::new(
            StoryId::new(id)?,
            name,
            placeholder("50", initials),
            placeholder("150", &format!("Story{n}")),
        ))
    };

    Ok(vec![
        story("s1", "Laura Croft", "LC", 1)?,
        story("s2", "James Bond", "JB", 2)?.already_viewed(),
        story("s3", "Alice Wonderland", "AW", 3)?,
        story("s4", "Peter Pan", "PP", 4)?,
        story("s5", "Clark Kent", "CK", 5)?.already_viewed(),
    ])
}

fn demo_groups() -> Result<Vec<Group>, InvalidEntityId> {
    let avatars = |prefix: &str, n: usize| -> Vec<String> {
        (1..=n)
            .map(|i| placeholder("30", &format!("{prefix}{i}")))
            .collect()
    };

    Ok(vec![
        Group::new(
            GroupId::new("g1")?,
            "Mad Men (MADdicts)",
            6195,
            placeholder("300x100", "Mad+Men+Banner"),
        )
        .with_avatars(avatars("U", 4))
        .with_category("TV Shows"),
        Group::new(
            GroupId::new("g2")?,
            "Dexter Morgan Fans",
            6984,
            placeholder("300x100", "Dexter+Banner"),
        )
        .with_avatars(avatars("D", 3))
        .with_category("TV Shows"),
        Group::new(
            GroupId::new("g3")?,
            "React Developers Community",
            12050,
            placeholder("300x100", "React+Devs"),
        )
        .with_avatars(avatars("RD", 5))
        .with_category("Technology"),
        Group::new(
            GroupId::new("g4")?,
            "Travel Enthusiasts Hub",
            22700,
            placeholder("300x100", "Travel+Hub"),
        )
        .with_avatars(avatars("T", 2))
        .with_category("Travel"),
    ])
}

fn demo_contacts() -> Result<Vec<ChatContact>, InvalidEntityId> {
    let contact = |id: &str, name: &str, initials: &str, online: bool| {
        Ok::<_, InvalidEntityId>(ChatContact::new(
            ContactId::new(id)?,
            name,
            placeholder("40", initials),
            online,
        ))
    };

    Ok(vec![
        contact("u1", "Alice Johnson", "AJ", true)?
            .with_last_message("Hey, are you free for a call?", "10m")
            .with_unread(2),
        contact("u2", "Bob Williams", "BW", false)?.with_last_message("Sounds good!", "1h"),
        contact("u3", "Charlie Brown", "CB", true)?.with_last_message("See you then.", "3h"),
        contact("u4", "Diana Prince", "DP", true)?
            .with_last_message("Can you send me the file?", "yesterday"),
        contact("u5", "Edward Cullen", "EC", false)?.with_last_message("Okay, will do.", "2d"),
        contact("u6", "Fiona Gallagher", "FG", true)?
            .with_last_message("Let me check.", "2d")
            .with_unread(5),
    ])
}

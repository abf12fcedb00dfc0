//! Suggested groups.

use super::identifiers::GroupId;

/// Maximum number of member avatars drawn on a group card before the `+N` badge.
pub const MAX_VISIBLE_GROUP_AVATARS: usize = 4;

/// A suggested group card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: String,
    member_count: u32,
    banner_ref: String,
    avatar_refs: Vec<String>,
    category: Option<String>,
}

impl Group {
    /// Create a group with no member avatars and no category.
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        member_count: u32,
        banner_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            member_count,
            banner_ref: banner_ref.into(),
            avatar_refs: Vec::new(),
            category: None,
        }
    }

    /// Member avatars in display order.
    pub fn with_avatars<I, S>(mut self, avatar_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avatar_refs = avatar_refs.into_iter().map(Into::into).collect();
        self
    }

    /// Category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members.
    pub fn member_count(&self) -> u32 {
        self.member_count
    }

    /// Opaque banner reference.
    pub fn banner_ref(&self) -> &str {
        &self.banner_ref
    }

    /// All member avatars.
    pub fn avatar_refs(&self) -> &[String] {
        &self.avatar_refs
    }

    /// Category label, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Split the member avatars into the visible prefix and the overflow count.
    pub fn avatar_stack(&self, max_visible: usize) -> AvatarStack<'_> {
        let split = self.avatar_refs.len().min(max_visible);
        AvatarStack {
            visible: &self.avatar_refs[..split],
            overflow: self.avatar_refs.len() - split,
        }
    }

    /// Subtitle line: `6,195 members • TV Shows`.
    pub fn subtitle(&self) -> String {
        let members = format!("{} members", group_thousands(self.member_count));
        match &self.category {
            Some(category) => format!("{members} • {category}"),
            None => members,
        }
    }
}

/// Avatars drawn on a group card plus the size of the `+N` badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarStack<'a> {
    /// Avatars drawn individually.
    pub visible: &'a [String],
    /// Avatars folded into the badge (0 means no badge).
    pub overflow: usize,
}

impl AvatarStack<'_> {
    /// Badge text, e.g. `+1`, or `None` when nothing overflows.
    pub fn badge(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

/// Format an integer with comma thousands separators (`22700` → `22,700`).
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

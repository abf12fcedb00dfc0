//! People shown on the dashboard: post authors, tagged friends, the signed-in user.

/// A named person with an avatar reference.
///
/// Used for post authors and tagged friends. The avatar reference is opaque;
/// image loading is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    avatar_ref: String,
}

impl Person {
    /// Create a person from a display name and avatar reference.
    pub fn new(name: impl Into<String>, avatar_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_ref: avatar_ref.into(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque avatar reference.
    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    /// Avatar fallback text (see [`initials`]).
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// The signed-in user the dashboard is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    person: Person,
    profile_path: String,
}

impl UserProfile {
    /// Create a profile.
    pub fn new(person: Person, profile_path: impl Into<String>) -> Self {
        Self {
            person,
            profile_path: profile_path.into(),
        }
    }

    /// The user as a [`Person`].
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Navigation target of the user's own profile.
    pub fn profile_path(&self) -> &str {
        &self.profile_path
    }

    /// First word of the display name, used for the composer prompt.
    ///
    /// Falls back to the full name when it has no whitespace.
    pub fn first_name(&self) -> &str {
        self.name().split_whitespace().next().unwrap_or(self.name())
    }

    /// Placeholder shown in the empty post composer.
    pub fn composer_prompt(&self) -> String {
        format!("What's on your mind, {}?", self.first_name())
    }

    /// Return a copy of this profile with a different display name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, self.person.avatar_ref()),
            profile_path: self.profile_path.clone(),
        }
    }
}

/// Avatar fallback: the first two characters of a name, uppercased.
///
/// Counts characters, not bytes, so multi-byte names never split mid-codepoint.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_takes_first_two_chars_uppercased() {
        assert_eq!(initials("Julia Fillory"), "JU");
        assert_eq!(initials("olenna"), "OL");
    }

    #[test]
    fn initials_of_short_name_is_whole_name() {
        assert_eq!(initials("x"), "X");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn initials_does_not_split_multibyte_chars() {
        assert_eq!(initials("Émile"), "ÉM");
    }

    #[test]
    fn composer_prompt_uses_first_name() {
        let user = UserProfile::new(Person::new("Olenna Mason", "om.png"), "/profile/olenna");
        assert_eq!(user.composer_prompt(), "What's on your mind, Olenna?");
    }

    #[test]
    fn first_name_of_single_word_name_is_name() {
        let user = UserProfile::new(Person::new("Cher", "c.png"), "/profile/cher");
        assert_eq!(user.first_name(), "Cher");
    }

    #[test]
    fn renamed_keeps_avatar_and_profile_path() {
        let user = UserProfile::new(Person::new("Olenna Mason", "om.png"), "/profile/olenna");
        let renamed = user.renamed("Ada Lovelace");
        assert_eq!(renamed.name(), "Ada Lovelace");
        assert_eq!(renamed.person().avatar_ref(), "om.png");
        assert_eq!(renamed.profile_path(), "/profile/olenna");
    }
}

//! Social profile links.

/// Platforms a contact can link to.
///
/// The set is closed; bulk input naming any other platform is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Youtube,
    Instagram,
    Website,
    Skype,
    Whatsapp,
}

impl SocialPlatform {
    pub const ALL: [Self; 8] = [
        Self::Facebook,
        Self::Twitter,
        Self::Linkedin,
        Self::Youtube,
        Self::Instagram,
        Self::Website,
        Self::Skype,
        Self::Whatsapp,
    ];

    /// Returns the lowercase key used in attribute maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
            Self::Website => "website",
            Self::Skype => "skype",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Returns the `TYPE` label emitted on the `URL` line.
    #[must_use]
    pub const fn type_label(self) -> &'static str {
        match self {
            Self::Facebook => "FACEBOOK",
            Self::Twitter => "TWITTER",
            Self::Linkedin => "LINKEDIN",
            Self::Youtube => "YOUTUBE",
            Self::Instagram => "INSTAGRAM",
            Self::Website => "WEBSITE",
            Self::Skype => "SKYPE",
            Self::Whatsapp => "WHATSAPP",
        }
    }

    /// ## Summary
    /// Looks up a platform by attribute key, ignoring ASCII case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.key().eq_ignore_ascii_case(key))
    }
}

/// Ordered platform-to-URL mapping.
///
/// A platform keeps the position of its first insertion; writing it again
/// replaces the URL in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    entries: Vec<(SocialPlatform, String)>,
}

impl SocialLinks {
    pub fn insert(&mut self, platform: SocialPlatform, url: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == platform) {
            entry.1 = url;
        } else {
            self.entries.push((platform, url));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.entries.iter().map(|(p, url)| (*p, url.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

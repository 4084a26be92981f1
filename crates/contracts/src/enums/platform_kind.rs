use serde::{Deserialize, Serialize};

/// Closed set of supported content platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    YouTube,
    Facebook,
    Spotify,
    ArdAudiothek,
}

/// Format constraint applied to a platform id.
///
/// Prefix and length are checked independently so each failure gets its own
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRule {
    /// No constraint beyond non-blank.
    Any,
    /// Channel-style id with a fixed prefix and exact length.
    ChannelId { prefix: &'static str, len: usize },
}

impl PlatformKind {
    /// The exact string stored in the `platform` column.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformKind::YouTube => "YouTube",
            PlatformKind::Facebook => "Facebook",
            PlatformKind::Spotify => "Spotify",
            PlatformKind::ArdAudiothek => "ARD Audiothek",
        }
    }

    pub fn all() -> Vec<PlatformKind> {
        vec![
            PlatformKind::YouTube,
            PlatformKind::Facebook,
            PlatformKind::Spotify,
            PlatformKind::ArdAudiothek,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "YouTube" => Some(PlatformKind::YouTube),
            "Facebook" => Some(PlatformKind::Facebook),
            "Spotify" => Some(PlatformKind::Spotify),
            "ARD Audiothek" => Some(PlatformKind::ArdAudiothek),
            _ => None,
        }
    }

    /// Id format rule for this platform. Only YouTube constrains the id today;
    /// new platforms add a variant mapping here instead of branching logic.
    pub fn id_rule(&self) -> IdRule {
        match self {
            PlatformKind::YouTube => IdRule::ChannelId {
                prefix: "UC",
                len: 24,
            },
            _ => IdRule::Any,
        }
    }

    /// All display names joined for validation messages.
    pub fn allowed_names() -> String {
        Self::all()
            .iter()
            .map(|k| k.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ToString for PlatformKind {
    fn to_string(&self) -> String {
        self.display_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_round_trip_through_from_name() {
        for kind in PlatformKind::all() {
            assert_eq!(PlatformKind::from_name(kind.display_name()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(PlatformKind::from_name("TikTok"), None);
        assert_eq!(PlatformKind::from_name(""), None);
    }

    #[test]
    fn only_youtube_constrains_the_id() {
        assert_eq!(
            PlatformKind::YouTube.id_rule(),
            IdRule::ChannelId {
                prefix: "UC",
                len: 24
            }
        );
        assert_eq!(PlatformKind::Facebook.id_rule(), IdRule::Any);
        assert_eq!(PlatformKind::Spotify.id_rule(), IdRule::Any);
        assert_eq!(PlatformKind::ArdAudiothek.id_rule(), IdRule::Any);
    }

    #[test]
    fn allowed_names_lists_every_platform() {
        assert_eq!(
            PlatformKind::allowed_names(),
            "YouTube, Facebook, Spotify, ARD Audiothek"
        );
    }
}

//! AniList profile colors and the accent they map to.

use serde::{Deserialize, Serialize};

/// Accent used when no profile color is available.
pub const FALLBACK_HIGHLIGHT: &str = ProfileColor::Pink.hex();

/// The preset profile colors AniList offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileColor {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Pink,
    Grey,
}

impl ProfileColor {
    pub const ALL: &[ProfileColor] = &[
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Pink,
        Self::Grey,
    ];

    /// Parse a preset token. Custom hex colors and unknown names return `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "green" => Some(Self::Green),
            "orange" => Some(Self::Orange),
            "red" => Some(Self::Red),
            "pink" => Some(Self::Pink),
            "grey" => Some(Self::Grey),
            _ => None,
        }
    }

    /// `#RRGGBB` form of the preset.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#61B1EC",
            Self::Purple => "#B368F6",
            Self::Green => "#70C661",
            Self::Orange => "#E28D3A",
            Self::Red => "#D0433C",
            Self::Pink => "#EEA2D3",
            Self::Grey => "#6B7A91",
        }
    }
}

/// Accent for an optional profile color; absent resolves to pink.
pub fn resolve(color: Option<ProfileColor>) -> &'static str {
    color.map_or(FALLBACK_HIGHLIGHT, ProfileColor::hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_pink() {
        assert_eq!(resolve(None), "#EEA2D3");
        assert_eq!(resolve(None), resolve(Some(ProfileColor::Pink)));
        assert_eq!(FALLBACK_HIGHLIGHT, "#EEA2D3");
    }

    #[test]
    fn test_blue() {
        assert_eq!(resolve(Some(ProfileColor::Blue)), "#61B1EC");
    }

    #[test]
    fn test_tokens_round_trip() {
        for color in ProfileColor::ALL {
            let token = serde_json::to_value(color).unwrap();
            let token = token.as_str().unwrap();
            assert_eq!(ProfileColor::from_token(token), Some(*color));
        }
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(ProfileColor::from_token("#ff00aa"), None);
        assert_eq!(ProfileColor::from_token("Blue"), None);
        assert_eq!(ProfileColor::from_token(""), None);
    }

    #[test]
    fn test_hex_shape() {
        for color in ProfileColor::ALL {
            let hex = color.hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}

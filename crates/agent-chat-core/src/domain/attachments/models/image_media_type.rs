// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Media types that are sent to the agent as inline images. Matching is exact: parameters or a
/// different casing make a file a plain `file` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum ImageMediaType {
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/gif")]
    Gif,
    #[strum(serialize = "image/webp")]
    Webp,
}

impl ImageMediaType {
    pub fn classify(media_type: &str) -> Option<Self> {
        media_type.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_allow_list_round_trips() {
        for media_type in ImageMediaType::iter() {
            assert_eq!(
                ImageMediaType::classify(media_type.as_ref()),
                Some(media_type)
            );
        }
        assert_eq!(ImageMediaType::Jpeg.to_string(), mime::IMAGE_JPEG.as_ref());
        assert_eq!(ImageMediaType::Png.to_string(), mime::IMAGE_PNG.as_ref());
        assert_eq!(ImageMediaType::Gif.to_string(), mime::IMAGE_GIF.as_ref());
    }

    #[test]
    fn test_rejects_everything_else() {
        for media_type in [
            "",
            "application/pdf",
            "image/svg+xml",
            "image/bmp",
            "IMAGE/PNG",
            "image/png; charset=binary",
            "text/plain",
        ] {
            assert_eq!(ImageMediaType::classify(media_type), None, "{media_type}");
        }
    }
}

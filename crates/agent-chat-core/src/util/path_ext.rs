// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::Path;

pub trait PathExt {
    /// Guesses the media type from the file extension. Unknown extensions yield an empty
    /// string, the same thing a browser reports for a `File` it cannot classify.
    fn declared_media_type(&self) -> String;
}

impl PathExt for Path {
    // https://github.com/abonander/mime_guess/issues/88
    fn declared_media_type(&self) -> String {
        let Some(media_type) = mime_guess::from_path(self).first() else {
            return String::new();
        };

        if media_type.type_() == mime::AUDIO && media_type.subtype() == "m4a" {
            return "audio/mp4".to_string();
        }

        media_type.essence_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(Path::new("photo.JPG").declared_media_type(), "image/jpeg");
        assert_eq!(Path::new("report.pdf").declared_media_type(), "application/pdf");
        assert_eq!(Path::new("clip.webp").declared_media_type(), "image/webp");
    }

    #[test]
    fn test_audio_mp4() {
        assert_eq!(Path::new("audio-file.m4a").declared_media_type(), "audio/mp4");
    }

    #[test]
    fn test_unknown_extension_is_empty() {
        assert_eq!(Path::new("notes.zzqx").declared_media_type(), "");
        assert_eq!(Path::new("Makefile").declared_media_type(), "");
    }
}

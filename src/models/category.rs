//! Predefined file categories understood by the category endpoint.

use std::fmt;

/// File category used for category filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Document,
    Image,
    Audio,
    Video,
    Compressed,
    Code,
}

impl Category {
    /// All categories, in sidebar order.
    pub const ALL: [Category; 7] = [
        Self::Text,
        Self::Document,
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::Compressed,
        Self::Code,
    ];

    /// Identifier used in the endpoint path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Document => "document",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Compressed => "compressed",
            Self::Code => "code",
        }
    }

    /// Human-readable name for headers and the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Document => "Documents",
            Self::Image => "Images",
            Self::Audio => "Audio",
            Self::Video => "Videos",
            Self::Compressed => "Archives",
            Self::Code => "Code",
        }
    }

    /// Guess the category of a file from its extension.
    ///
    /// Mirrors the backend's classification table; used for icons only.
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let (_, ext) = name.rsplit_once('.')?;
        let category = match ext.to_ascii_lowercase().as_str() {
            "txt" | "srt" | "md" | "json" | "xml" | "log" | "ini" | "cfg" => Self::Text,
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" => Self::Document,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "tiff" | "svg" => Self::Image,
            "mp3" | "wav" | "aac" | "flac" | "ogg" | "m4a" => Self::Audio,
            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" => Self::Video,
            "zip" | "rar" | "tar" | "gz" | "7z" => Self::Compressed,
            "py" | "js" | "java" | "cpp" | "h" | "cs" | "php" | "html" | "css" => Self::Code,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(ids.len(), Category::ALL.len());
        assert_eq!(Category::Compressed.as_str(), "compressed");
        assert_eq!(Category::Document.to_string(), "Documents");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Category::from_path("C:\\photos\\IMG_01.JPG"), Some(Category::Image));
        assert_eq!(Category::from_path("/src/main.py"), Some(Category::Code));
        assert_eq!(Category::from_path("backup.tar.gz"), Some(Category::Compressed));
        assert_eq!(Category::from_path("/etc/hosts"), None);
        assert_eq!(Category::from_path("/home/me.d/Makefile"), None);
    }
}

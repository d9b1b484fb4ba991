//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Category;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as Organize, LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCode as FileCode, LuFile as File, LuFileText as FileText,
        LuFilm as FileVideo, LuFolder as Folder, LuHardDrive as Drive, LuImage as FileImage,
        LuLayoutGrid as Grid, LuList as List, LuListChecks as SelectAll, LuMusic as FileAudio,
        LuPackage as FileArchive, LuBookOpen as FileDocument, LuRefreshCw as Refresh,
        LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArchive as Organize, BsCheck2Square as SelectAll, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkRichtext as FileDocument, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsGrid as Grid, BsHdd as Drive,
        BsListUl as List, BsArrowClockwise as Refresh, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(DRIVE, Drive);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_DOCUMENT, FileDocument);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(REFRESH, Refresh);
themed_icon!(SELECT_ALL, SelectAll);
themed_icon!(ORGANIZE, Organize);
themed_icon!(CLOSE, Close);

/// Icon shown for a category in the sidebar and for files of that category.
pub fn category_icon(category: Category) -> Icon {
    match category {
        Category::Text => FILE_TEXT,
        Category::Document => FILE_DOCUMENT,
        Category::Image => FILE_IMAGE,
        Category::Audio => FILE_AUDIO,
        Category::Video => FILE_VIDEO,
        Category::Compressed => FILE_ARCHIVE,
        Category::Code => FILE_CODE,
    }
}

//! File type icons.
//!
//! The icon lookup is total: every file type value, including unknown and
//! absent ones, maps to an icon.

use std::path::Path;

use crate::descriptor::DocumentFileType;
use crate::file_utils::{embedded_data_url, load_image_as_data_url};

/// Icon shown on a document card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileIcon {
    Sheet,
    Pdf,
    Docx,
    #[default]
    Txt,
}

impl FileIcon {
    /// Icon for a file type; unknown or missing types get the text icon.
    pub fn for_type(file_type: Option<&DocumentFileType>) -> Self {
        match file_type {
            Some(DocumentFileType::Csv) => Self::Sheet,
            Some(DocumentFileType::Pdf) => Self::Pdf,
            Some(DocumentFileType::Docx) => Self::Docx,
            Some(DocumentFileType::Txt) | Some(DocumentFileType::Other(_)) | None => Self::Txt,
        }
    }

    /// Asset file name, also used when loading an override directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Sheet => "sheet.svg",
            Self::Pdf => "pdf.svg",
            Self::Docx => "docx.svg",
            Self::Txt => "txt.svg",
        }
    }

    fn embedded_svg(&self) -> &'static [u8] {
        match self {
            Self::Sheet => include_bytes!("../assets/icons/sheet.svg"),
            Self::Pdf => include_bytes!("../assets/icons/pdf.svg"),
            Self::Docx => include_bytes!("../assets/icons/docx.svg"),
            Self::Txt => include_bytes!("../assets/icons/txt.svg"),
        }
    }

    pub fn all() -> &'static [FileIcon] {
        &[FileIcon::Sheet, FileIcon::Pdf, FileIcon::Docx, FileIcon::Txt]
    }
}

/// Resolved image sources for every icon.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSet {
    sheet: String,
    pdf: String,
    docx: String,
    txt: String,
}

impl IconSet {
    /// Icons bundled with the crate.
    pub fn embedded() -> Self {
        Self::build(|icon| embedded_data_url("image/svg+xml", icon.embedded_svg()))
    }

    /// Icons loaded from `dir`, falling back to the bundled icon per file.
    pub fn from_dir(dir: &Path) -> Self {
        Self::build(|icon| {
            let path = dir.join(icon.file_name());
            load_image_as_data_url(&path).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "icon override unreadable, using bundled icon");
                embedded_data_url("image/svg+xml", icon.embedded_svg())
            })
        })
    }

    /// Image source for an icon.
    pub fn src(&self, icon: FileIcon) -> &str {
        match icon {
            FileIcon::Sheet => &self.sheet,
            FileIcon::Pdf => &self.pdf,
            FileIcon::Docx => &self.docx,
            FileIcon::Txt => &self.txt,
        }
    }

    fn build(mut resolve: impl FnMut(FileIcon) -> String) -> Self {
        Self {
            sheet: resolve(FileIcon::Sheet),
            pdf: resolve(FileIcon::Pdf),
            docx: resolve(FileIcon::Docx),
            txt: resolve(FileIcon::Txt),
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_get_distinct_icons() {
        let icons = [
            FileIcon::for_type(Some(&DocumentFileType::Csv)),
            FileIcon::for_type(Some(&DocumentFileType::Pdf)),
            FileIcon::for_type(Some(&DocumentFileType::Docx)),
            FileIcon::for_type(Some(&DocumentFileType::Txt)),
        ];
        assert_eq!(icons, [FileIcon::Sheet, FileIcon::Pdf, FileIcon::Docx, FileIcon::Txt]);
    }

    #[test]
    fn test_unknown_and_missing_fall_back_to_txt() {
        assert_eq!(FileIcon::for_type(None), FileIcon::Txt);
        for raw in ["", "xlsx", "PDF", "🦀"] {
            let file_type = DocumentFileType::Other(raw.to_string());
            assert_eq!(FileIcon::for_type(Some(&file_type)), FileIcon::Txt);
        }
    }

    #[test]
    fn test_embedded_sources_are_distinct() {
        let set = IconSet::embedded();
        for icon in FileIcon::all() {
            assert!(set.src(*icon).starts_with("data:image/svg+xml;base64,"));
        }
        assert_ne!(set.src(FileIcon::Pdf), set.src(FileIcon::Txt));
        assert_ne!(set.src(FileIcon::Sheet), set.src(FileIcon::Docx));
    }

    #[test]
    fn test_from_missing_dir_falls_back() {
        let set = IconSet::from_dir(Path::new("/definitely/not/a/dir"));
        assert_eq!(set, IconSet::embedded());
    }
}

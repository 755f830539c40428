//! Document preview components for Indras Network chat apps.
//!
//! Renders attached documents as compact cards (icon, name, size, type).
//! Documents already resolved to external references render as static
//! cards; all others open a slide-out drawer with their raw content.

pub mod card;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod file_utils;
pub mod gallery;
pub mod icon;
pub mod overlay;
pub mod preview;
pub mod size;

pub use card::{CardView, PreviewCard, class_names};
pub use config::PreviewConfig;
pub use context::{DocumentPreviewRoot, PreviewContext, use_preview_context};
pub use descriptor::{CardFile, DocumentDescriptor, DocumentFileType, DocumentMetadata};
pub use error::{PreviewError, Result};
pub use gallery::DocumentPreviewList;
pub use icon::{FileIcon, IconSet};
pub use overlay::{Drawer, DrawerClose, DrawerDirection, OverlayState};
pub use preview::{DocumentPreview, OverlayContent, PreviewMode};
pub use size::{format_kb, in_kb, size_suffix};

/// Stylesheet for cards and the drawer, for host apps to inject.
pub const DOCUMENT_PREVIEW_CSS: &str = include_str!("../assets/document_preview.css");

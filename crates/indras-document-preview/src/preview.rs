//! Document preview: a static card for documents already resolved to
//! references, otherwise a card that opens a raw content drawer.

use dioxus::prelude::*;

use crate::card::PreviewCard;
use crate::context::use_preview_context;
use crate::descriptor::DocumentDescriptor;
use crate::overlay::{Drawer, DrawerClose, OverlayState};
use crate::size::format_kb;

/// Text shown inside the raw content drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayContent {
    /// `"PDF Raw Content"`.
    pub title: String,
    /// `"report.pdf (200 KB)"`.
    pub description: String,
    /// Joined reference ids. Interactive mode is only chosen without
    /// references, so this is `None` for every descriptor that reaches it.
    pub body: Option<String>,
}

impl OverlayContent {
    pub fn new(file: &DocumentDescriptor) -> Self {
        let title = match file.file_type() {
            Some(file_type) => format!("{} Raw Content", file_type.upper_label()),
            None => "Raw Content".to_string(),
        };
        // The drawer has no zero-size check: 0 bytes shows "(0 KB)".
        let description = match file.filesize {
            Some(bytes) => format!("{} ({} KB)", file.filename, format_kb(bytes)),
            None => file.filename.clone(),
        };
        Self {
            title,
            description,
            body: file.joined_refs(),
        }
    }
}

/// How a document preview renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewMode {
    /// Non-interactive card labelled with its reference ids.
    Reference { title: String },
    /// Card that opens a drawer with the document's raw content.
    Interactive { overlay: OverlayContent },
}

impl PreviewMode {
    pub fn for_descriptor(file: &DocumentDescriptor) -> Self {
        match file.joined_refs() {
            Some(ids) => Self::Reference {
                title: format!("Document IDs: {}", ids),
            },
            None => Self::Interactive {
                overlay: OverlayContent::new(file),
            },
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive { .. })
    }
}

/// Preview of a single chat document.
#[component]
pub fn DocumentPreview(
    file: DocumentDescriptor,
    #[props(default)]
    on_remove: Option<EventHandler<()>>,
) -> Element {
    let ctx = use_preview_context();
    let mut overlay = use_signal(OverlayState::default);
    let card_file = file.card_file();

    match PreviewMode::for_descriptor(&file) {
        PreviewMode::Reference { title } => {
            tracing::debug!(filename = %file.filename, "document preview in reference mode");
            rsx! {
                div {
                    class: "document-preview document-preview-reference",
                    title: "{title}",
                    PreviewCard { file: card_file, on_remove }
                }
            }
        }
        PreviewMode::Interactive { overlay: content } => {
            tracing::debug!(filename = %file.filename, "document preview in interactive mode");
            rsx! {
                div {
                    class: "document-preview document-preview-interactive",
                    div {
                        class: "drawer-trigger",
                        onclick: move |_| overlay.with_mut(OverlayState::open),
                        PreviewCard {
                            file: card_file,
                            on_remove,
                            class: "document-card-clickable".to_string(),
                        }
                    }
                    Drawer {
                        state: overlay,
                        direction: ctx.config.drawer_direction,
                        class: "document-raw-drawer".to_string(),
                        div {
                            class: "drawer-header",
                            div {
                                class: "drawer-heading",
                                h2 { class: "drawer-title", "{content.title}" }
                                p { class: "drawer-description", "{content.description}" }
                            }
                            DrawerClose { state: overlay, label: "Close".to_string() }
                        }
                        div {
                            class: "drawer-body",
                            if let Some(ref body) = content.body {
                                pre { class: "drawer-raw", "{body}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

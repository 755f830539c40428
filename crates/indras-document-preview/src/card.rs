//! Compact document card: icon, name, size and type.

use dioxus::prelude::*;

use crate::context::use_preview_context;
use crate::descriptor::CardFile;
use crate::icon::FileIcon;
use crate::size::size_suffix;

/// Text and icon a card displays for a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub icon: FileIcon,
    /// Filename plus `" (<kb> KB)"` for non-zero sizes.
    pub label_line: String,
    /// `"PDF File"`, only when the file has a type.
    pub type_line: Option<String>,
}

impl CardView {
    pub fn new(file: &CardFile) -> Self {
        let suffix = size_suffix(file.filesize).unwrap_or_default();
        Self {
            icon: FileIcon::for_type(file.file_type()),
            label_line: format!("{}{}", file.filename, suffix),
            type_line: file
                .file_type()
                .map(|t| format!("{} File", t.upper_label())),
        }
    }
}

/// Join class names, skipping empty entries.
pub fn class_names<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed-size document card with an optional remove button.
#[component]
pub fn PreviewCard(
    file: CardFile,
    #[props(default)]
    on_remove: Option<EventHandler<()>>,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let ctx = use_preview_context();
    let view = CardView::new(&file);
    let icon_src = ctx.icons.src(view.icon).to_string();
    let type_line = view.type_line.filter(|_| ctx.config.show_type_line);
    let card_class = class_names([Some("document-card"), class.as_deref()]);

    rsx! {
        div {
            class: "{card_class}",
            div {
                class: "document-card-row",
                div {
                    class: "document-card-icon",
                    img {
                        class: "document-card-icon-img",
                        src: "{icon_src}",
                        alt: "Icon",
                    }
                }
                div {
                    class: "document-card-text",
                    div { class: "document-card-name", "{view.label_line}" }
                    if let Some(ref line) = type_line {
                        div {
                            class: "document-card-type",
                            span { "{line}" }
                        }
                    }
                }
            }
            if let Some(handler) = on_remove {
                button {
                    class: "document-card-remove",
                    title: "Remove",
                    onclick: move |e| {
                        e.stop_propagation();
                        handler.call(());
                    },
                    "\u{2715}"
                }
            }
        }
    }
}

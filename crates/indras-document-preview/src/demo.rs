//! Demo app showing document previews inside a chat-like column.

use std::path::Path;
use std::sync::OnceLock;

use dioxus::prelude::*;
use indras_document_preview::{
    DocumentDescriptor, DocumentFileType, DocumentPreviewList, DocumentPreviewRoot, PreviewConfig,
    PreviewError,
};

/// Inputs resolved from the command line before launch.
#[derive(Clone, Debug)]
pub struct DemoState {
    pub documents: Vec<DocumentDescriptor>,
    pub config: PreviewConfig,
    pub removable: bool,
}

pub static DEMO_STATE: OnceLock<DemoState> = OnceLock::new();

/// Read a JSON array of descriptors.
pub fn load_documents(path: &Path) -> Result<Vec<DocumentDescriptor>, PreviewError> {
    let raw = std::fs::read_to_string(path).map_err(|source| PreviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DocumentDescriptor::list_from_json(&raw)
}

/// Built-in documents covering each render path.
pub fn sample_documents() -> Vec<DocumentDescriptor> {
    vec![
        DocumentDescriptor::new("report.pdf")
            .with_size(204_800)
            .with_type(DocumentFileType::Pdf),
        DocumentDescriptor::new("sales.csv")
            .with_size(1_536)
            .with_type(DocumentFileType::Csv),
        DocumentDescriptor::new("proposal.docx")
            .with_size(48_213)
            .with_type(DocumentFileType::Docx),
        DocumentDescriptor::new("empty.txt")
            .with_size(0)
            .with_type(DocumentFileType::Txt),
        DocumentDescriptor::new("indexed.pdf")
            .with_size(1_048_576)
            .with_type(DocumentFileType::Pdf)
            .with_refs(["doc-7f3a", "doc-19c2"]),
        DocumentDescriptor::new("slides.key").with_type(DocumentFileType::Other("key".into())),
        DocumentDescriptor::new("untyped"),
    ]
}

#[component]
pub fn App() -> Element {
    let state = DEMO_STATE.get().cloned().unwrap_or_else(|| DemoState {
        documents: sample_documents(),
        config: PreviewConfig::default(),
        removable: false,
    });
    let mut files = use_signal(|| state.documents.clone());

    let on_remove = state.removable.then(|| {
        EventHandler::new(move |index: usize| {
            let mut list = files.write();
            if index < list.len() {
                let removed = list.remove(index);
                tracing::info!(filename = %removed.filename, "removed document");
            }
        })
    });

    rsx! {
        DocumentPreviewRoot {
            config: state.config.clone(),
            div {
                class: "demo-column",
                h1 { class: "demo-title", "Attached documents" }
                if files.read().is_empty() {
                    p { class: "demo-empty", "No documents." }
                }
                DocumentPreviewList { files: files(), on_remove }
            }
        }
    }
}

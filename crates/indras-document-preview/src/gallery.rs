//! Row of document previews, as shown under a message or in the composer.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::descriptor::DocumentDescriptor;
use crate::preview::DocumentPreview;

/// Stable keys for a list of previews.
///
/// Keys come from the filename, so removing one document does not remount
/// the others. Repeated filenames get a `#n` occurrence suffix.
pub fn preview_keys(files: &[DocumentDescriptor]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    files
        .iter()
        .map(|file| {
            let count = seen.entry(file.filename.as_str()).or_insert(0);
            let key = if *count == 0 {
                file.filename.clone()
            } else {
                format!("{}#{}", file.filename, count)
            };
            *count += 1;
            key
        })
        .collect()
}

/// Renders each document in order. With `on_remove`, every card gets a
/// remove button reporting its index.
#[component]
pub fn DocumentPreviewList(
    files: Vec<DocumentDescriptor>,
    #[props(default)]
    on_remove: Option<EventHandler<usize>>,
) -> Element {
    if files.is_empty() {
        return rsx! {};
    }

    let keys = preview_keys(&files);

    rsx! {
        div {
            class: "document-preview-list",
            for (index, (key, file)) in keys.into_iter().zip(files).enumerate() {
                {
                    let on_remove = on_remove.map(|handler| {
                        EventHandler::new(move |_: ()| handler.call(index))
                    });
                    rsx! {
                        DocumentPreview { key: "{key}", file, on_remove }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(names: &[&str]) -> Vec<DocumentDescriptor> {
        names.iter().map(|n| DocumentDescriptor::new(*n)).collect()
    }

    #[test]
    fn test_keys_follow_filenames() {
        assert_eq!(preview_keys(&docs(&["a.csv", "b.pdf"])), ["a.csv", "b.pdf"]);
    }

    #[test]
    fn test_duplicate_filenames_get_suffix() {
        assert_eq!(
            preview_keys(&docs(&["a.txt", "b.txt", "a.txt", "a.txt"])),
            ["a.txt", "b.txt", "a.txt#1", "a.txt#2"]
        );
    }

    #[test]
    fn test_keys_stable_after_removal() {
        let before = preview_keys(&docs(&["a.csv", "b.pdf", "c.docx"]));
        let after = preview_keys(&docs(&["b.pdf", "c.docx"]));
        assert_eq!(&before[1..], &after[..]);
    }
}

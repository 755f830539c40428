//! Shared preview settings provided through Dioxus context.

use dioxus::prelude::*;

use crate::config::PreviewConfig;
use crate::icon::IconSet;

/// Config plus the icon sources resolved from it.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewContext {
    pub config: PreviewConfig,
    pub icons: IconSet,
}

impl PreviewContext {
    pub fn new(config: PreviewConfig) -> Self {
        let icons = config.icon_set();
        Self { config, icons }
    }
}

impl Default for PreviewContext {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

/// Provides a [`PreviewContext`] to every preview below it.
///
/// The context is recomputed whenever `config` changes, and previews
/// already mounted re-render with it.
#[component]
pub fn DocumentPreviewRoot(
    #[props(default)]
    config: PreviewConfig,
    children: Element,
) -> Element {
    let shared = use_memo(use_reactive((&config,), |(config,)| {
        tracing::debug!(drawer = %config.drawer_direction, "preview config applied");
        PreviewContext::new(config)
    }));
    use_context_provider(|| shared);

    rsx! {
        div { class: "document-preview-root", {children} }
    }
}

/// Nearest provided context, or the defaults when rendered standalone.
pub fn use_preview_context() -> PreviewContext {
    let shared = use_hook(try_consume_context::<Memo<PreviewContext>>);
    let fallback = use_hook(|| shared.is_none().then(PreviewContext::default));
    match shared {
        Some(memo) => memo(),
        None => fallback.unwrap_or_default(),
    }
}

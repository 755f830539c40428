//! Slide-out drawer for a document's raw content.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Open/closed state of a drawer.
///
/// Owned by the component instance that mounts the drawer; dropped with it,
/// so every fresh mount starts `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    /// Trigger activation.
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Close affordance activation.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Backdrop click or Escape.
    pub fn dismiss(&mut self) {
        self.close();
    }

    pub fn is_open(&self) -> bool {
        *self == Self::Open
    }
}

/// Edge of the window the drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerDirection {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl DrawerDirection {
    /// Returns the CSS modifier class.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Left => "drawer-left",
            Self::Right => "drawer-right",
            Self::Top => "drawer-top",
            Self::Bottom => "drawer-bottom",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for DrawerDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown drawer direction: {other}")),
        }
    }
}

impl fmt::Display for DrawerDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drawer panel. Renders nothing while `state` is closed.
#[component]
pub fn Drawer(
    mut state: Signal<OverlayState>,
    #[props(default)]
    direction: DrawerDirection,
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    if !state().is_open() {
        return rsx! {};
    }

    let panel_class = format!(
        "drawer-content {} {}",
        direction.css_class(),
        class.unwrap_or_default()
    );

    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |_| state.with_mut(OverlayState::dismiss),
            div {
                class: "{panel_class}",
                role: "dialog",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                // Escape only reaches the panel once it holds focus.
                onmounted: move |e: MountedEvent| async move {
                    if let Err(err) = e.set_focus(true).await {
                        tracing::debug!(?err, "drawer panel could not take focus");
                    }
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Escape {
                        state.with_mut(OverlayState::dismiss);
                    }
                },
                {children}
            }
        }
    }
}

/// Button that closes the enclosing drawer.
#[component]
pub fn DrawerClose(mut state: Signal<OverlayState>, label: String) -> Element {
    rsx! {
        button {
            class: "drawer-close",
            onclick: move |_| state.with_mut(OverlayState::close),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
        assert!(!OverlayState::default().is_open());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut state = OverlayState::default();
        state.open();
        assert_eq!(state, OverlayState::Open);
        state.close();
        assert_eq!(state, OverlayState::Closed);
        state.open();
        state.dismiss();
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut state = OverlayState::Open;
        state.open();
        assert!(state.is_open());
        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("left".parse::<DrawerDirection>(), Ok(DrawerDirection::Left));
        assert_eq!(" Right ".parse::<DrawerDirection>(), Ok(DrawerDirection::Right));
        assert!("sideways".parse::<DrawerDirection>().is_err());
        assert_eq!(DrawerDirection::Bottom.to_string(), "bottom");
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&DrawerDirection::Top).unwrap();
        assert_eq!(json, r#""top""#);
        let parsed: DrawerDirection = serde_json::from_str(r#""bottom""#).unwrap();
        assert_eq!(parsed, DrawerDirection::Bottom);
    }
}

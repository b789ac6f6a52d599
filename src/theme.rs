//! Dark/light theme: resolution, persistence and the OS color-scheme watch.
//!
//! The stored preference always wins once present; the OS signal only
//! applies while the user has never toggled explicitly.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Storage;

pub const STORAGE_KEY: &str = "theme";
/// Transition window opened when the theme flips, so colors fade instead of
/// snapping.
const TRANSITION_WINDOW: &str = "background-color 0.3s ease, color 0.3s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Stored preference wins; otherwise the OS signal; otherwise dark.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> Theme {
    match (stored, system_prefers_dark) {
        (Some(theme), _) => theme,
        (None, Some(false)) => Theme::Light,
        (None, _) => Theme::Dark,
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read_stored() -> Option<Theme> {
    let value = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

pub fn persist(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

pub fn system_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(query.matches())
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Set `data-theme` on the document element and open the transition window.
pub fn apply(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = root.style().set_property("transition", TRANSITION_WINDOW);
    }
}

/// Collapse the transition durations when the OS asks for reduced motion.
pub fn apply_reduced_motion() {
    if !prefers_reduced_motion() {
        return;
    }
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|r| r.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    let _ = style.set_property("--transition-normal", "0.01s");
    let _ = style.set_property("--transition-slow", "0.01s");
}

/// Watch the OS color scheme. Changes are forwarded only while no stored
/// preference exists; dropping the listener unsubscribes.
pub fn watch_system(on_change: impl Fn(Theme) + 'static) -> Option<EventListener> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(EventListener::new(&query, "change", move |event| {
        if read_stored().is_some() {
            return;
        }
        let Some(event) = event.dyn_ref::<web_sys::MediaQueryListEvent>() else {
            return;
        };
        on_change(if event.matches() {
            Theme::Dark
        } else {
            Theme::Light
        });
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins() {
        assert_eq!(resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(resolve(Some(Theme::Dark), Some(false)), Theme::Dark);
    }

    #[test]
    fn system_signal_applies_when_unset() {
        assert_eq!(resolve(None, Some(false)), Theme::Light);
        assert_eq!(resolve(None, Some(true)), Theme::Dark);
    }

    #[test]
    fn defaults_to_dark_without_any_signal() {
        assert_eq!(resolve(None, None), Theme::Dark);
    }

    #[test]
    fn string_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

use gloo::events::EventListener;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "billwise.theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Colour scheme preference. `Auto` follows the operating system.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

impl Theme {
    /// Value written to `<html data-theme>`.
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light | Self::Auto => "light",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Light and Dark swap; Auto is resolved before toggling.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::Auto => Self::Dark,
        }
    }

    /// Resolves `Auto` against the system preference.
    pub const fn resolve(self, system: Self) -> Self {
        match self {
            Self::Auto => system,
            other => other,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub effective_theme: Theme,
    pub toggle: Callback<()>,
}

/// Theme preference persisted in localStorage and applied to the document.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_preference().unwrap_or(Theme::Auto));
    let system = use_state(system_preference);
    let effective_theme = theme.resolve(*system);

    use_effect_with(effective_theme, |theme| {
        apply_to_document(*theme);
        || ()
    });

    {
        let system = system.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_preference(system.setter());
            move || drop(listener)
        });
    }

    use_effect_with(*theme, |theme| {
        save_preference(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(effective_theme.toggled()))
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
}

fn system_preference() -> Theme {
    match dark_media_query() {
        Some(mq) if mq.matches() => Theme::Dark,
        _ => Theme::Light,
    }
}

fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_attr()) {
            gloo::console::warn!(format!("Failed to apply theme: {e:?}"));
        }
    }
}

fn load_preference() -> Option<Theme> {
    LocalStorage::get(STORAGE_KEY).ok()
}

fn save_preference(theme: Theme) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY, theme) {
        gloo::console::warn!(format!("Failed to save theme: {e:?}"));
    }
}

fn watch_system_preference(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    let target = dark_media_query()?.dyn_into::<web_sys::EventTarget>().ok()?;

    Some(EventListener::new(&target, "change", move |_| {
        setter.set(system_preference());
    }))
}

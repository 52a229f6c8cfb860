use gloo_storage::{LocalStorage, Storage};
use leptos::{document, window};

const THEME_STORAGE_KEY: &str = "theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The stored theme or the preferred color scheme of the browser.
    pub fn preferred() -> Self {
        if let Some(theme) = LocalStorage::get::<String>(THEME_STORAGE_KEY)
            .ok()
            .and_then(|s| Self::from_name(&s))
        {
            return theme;
        }
        let prefers_dark = window()
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .is_some_and(|list| list.matches());
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Switch the document to this theme and remember it.
    pub fn apply(self) {
        if let Some(root) = document().document_element() {
            let classes = root.class_list();
            let result = match self {
                Self::Dark => classes.add_1(DARK_CLASS),
                Self::Light => classes.remove_1(DARK_CLASS),
            };
            if let Err(err) = result {
                log::warn!("Unable to apply theme: {err:?}");
            }
        }
        if let Err(err) = LocalStorage::set(THEME_STORAGE_KEY, self.as_str()) {
            log::warn!("Unable to store theme: {err}");
        }
    }
}

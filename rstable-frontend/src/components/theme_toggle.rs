use leptos::*;

use crate::theme::Theme;

#[component]
pub fn ThemeToggle<F>(theme: Signal<Theme>, on_toggle: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
      <button class="theme-toggle" on:click = move |_| on_toggle()>
        { move || match theme.get() {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
          }
        }
      </button>
    }
}

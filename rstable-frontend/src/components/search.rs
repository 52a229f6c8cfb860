use leptos::*;
use rstable_core::util::filter::MIN_SEARCH_TERM_LEN;

#[component]
pub fn SearchBar<F>(search_term: Signal<String>, on_change: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let placeholder = format!("Search restaurants (min {MIN_SEARCH_TERM_LEN} chars)...");
    view! {
      <div class="search">
        <input
          type="text"
          placeholder = placeholder
          prop:value = move || search_term.get()
          on:input = move |ev| on_change(event_target_value(&ev))
        />
      </div>
    }
}

use leptos::*;

use rstable_core::{
    entities::Restaurant,
    fetch::FetchError,
    util::sort::SortKey,
    view::ViewState,
};
use rstable_frontend_api as api;

mod components;
mod geolocation;
mod theme;

use components::*;
use theme::Theme;

const DEFAULT_API_URL: &str = "http://localhost:3001";

fn api_url() -> &'static str {
    option_env!("RSTABLE_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn fetch_error(err: api::Error) -> FetchError {
    match err {
        api::Error::Fetch(msg) => FetchError::Transport(msg),
        api::Error::Status(status) => FetchError::Status(status),
        api::Error::Decode(msg) => FetchError::Decode(msg),
    }
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let view_state = RwSignal::new(ViewState::new());
    let theme = RwSignal::new(Theme::preferred());
    let rows = Memo::new(move |_| view_state.with(ViewState::rows));
    let location = Signal::derive(move || view_state.with(|s| s.location().clone()));
    let sorting = Signal::derive(move || view_state.with(ViewState::sorting));
    let search_term = Signal::derive(move || view_state.with(|s| s.search_term().to_owned()));

    // -- actions -- //

    let fetch_restaurants = Action::new(move |()| async move {
        let public_api = api::PublicApi::new(api_url().to_owned());
        let result = public_api
            .restaurants()
            .await
            .map(|records| records.into_iter().map(Restaurant::from).collect())
            .map_err(fetch_error);
        view_state.update(|s| s.restaurants_fetched(result));
    });

    // -- callbacks -- //

    let on_search = move |term: String| {
        view_state.update(|s| s.set_search_term(term));
    };

    let on_sort = move |key: SortKey| {
        view_state.update(|s| {
            let sorting = s.request_sort(key);
            log::debug!("Sort by {} ({:?})", sorting.key, sorting.direction);
        });
    };

    let on_toggle_theme = move || {
        theme.update(|t| *t = t.toggled());
        log::info!("Toggling theme to: {}", theme.get_untracked().as_str());
    };

    // -- init -- //

    fetch_restaurants.dispatch(());
    geolocation::request_current_position(move |result| {
        let changed = view_state
            .try_update(|s| s.location_resolved(result))
            .unwrap_or_default();
        if !changed {
            log::debug!("Ignoring repeated location update");
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        theme.get().apply();
    });

    view! {
      <div class="page">
        <header class="page-header">
          <h1>"Lista de Restaurantes"</h1>
          <ThemeToggle theme = theme.into() on_toggle = on_toggle_theme />
        </header>
        <main>
          <SearchBar search_term on_change = on_search />
          <RestaurantTable rows = rows.into() location sorting on_sort />
        </main>
      </div>
    }
}

pub fn run() {
    mount_to_body(|| view! { <App /> });
}


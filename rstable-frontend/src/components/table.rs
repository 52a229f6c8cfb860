use leptos::*;

use rstable_core::{
    location::LocationState,
    usecases::google_maps_search_url,
    util::sort::{SortDirection, SortKey, Sorting},
    view::{distance_label, Row},
};

const NOT_AVAILABLE: &str = "N/A";

const fn header_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Visited => "Visitado",
        SortKey::Name => "Nombre",
        SortKey::Address => "Dirección",
        SortKey::Comments => "Comentarios",
        SortKey::Distance => "Distancia",
        SortKey::LastUpdated => "Última Act.",
    }
}

fn sort_indicator(sorting: Option<Sorting>, key: SortKey) -> &'static str {
    match sorting {
        Some(Sorting {
            key: sorted_by,
            direction,
        }) if sorted_by == key => match direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "",
    }
}

#[component]
pub fn RestaurantTable<F>(
    rows: Signal<Vec<Row>>,
    location: Signal<LocationState>,
    sorting: Signal<Option<Sorting>>,
    on_sort: F,
) -> impl IntoView
where
    F: Fn(SortKey) + Copy + 'static,
{
    let sortable_header = move |key: SortKey| {
        view! {
          <th scope="col" class="sortable" on:click = move |_| on_sort(key)>
            { header_label(key) } " " { move || sort_indicator(sorting.get(), key) }
          </th>
        }
    };

    view! {
      <div class="table-container">
        <table>
          <thead>
            <tr>
              { sortable_header(SortKey::Visited) }
              { sortable_header(SortKey::Name) }
              { sortable_header(SortKey::Address) }
              <th scope="col">"Horarios"</th>
              { sortable_header(SortKey::Comments) }
              <th scope="col">"Maps"</th>
              { sortable_header(SortKey::Distance) }
              { sortable_header(SortKey::LastUpdated) }
            </tr>
          </thead>
          <tbody>
            { move || rows
                .get()
                .into_iter()
                .map(|row| view! { <RestaurantRow row location /> })
                .collect_view()
            }
          </tbody>
        </table>
      </div>
    }
}

#[component]
fn RestaurantRow(row: Row, location: Signal<LocationState>) -> impl IntoView {
    let Row {
        restaurant,
        distance,
    } = row;
    let address_url = google_maps_search_url(&restaurant.address);
    let last_updated = restaurant
        .last_updated
        .map(|ts| ts.to_short_string())
        .unwrap_or_default();
    let opening_hours = match restaurant.opening_hours {
        Some(hours) => view! {
          <ul class="opening-hours">
            { hours.into_iter().map(|h| view! { <li>{ h }</li> }).collect_view() }
          </ul>
        }
        .into_view(),
        None => NOT_AVAILABLE.into_view(),
    };
    view! {
      <tr>
        <td>{ if restaurant.visited { "✅" } else { "❌" } }</td>
        <td class="name">
          <a href = restaurant.google_maps_url target="_blank" rel="noopener noreferrer">
            { restaurant.name }
          </a>
        </td>
        <td>
          <a href = address_url target="_blank" rel="noopener noreferrer">
            { restaurant.address }
          </a>
        </td>
        <td>{ opening_hours }</td>
        <td>{ restaurant.comments }</td>
        <td><div class="map-thumbnail">"Map"</div></td>
        <td>{ move || location.with(|l| distance_label(distance, l)) }</td>
        <td>{ last_updated }</td>
      </tr>
    }
}

//! The restaurant table for the terminal.

use std::fmt::Write as _;

use rstable_core::{
    entities::{MapPoint, Restaurant},
    fetch::FetchError,
    location::{LocationError, LocationState},
    util::sort::SortKey,
    view::{distance_label, Row, ViewState},
};

const HEADERS: [&str; 6] = [
    "Visited",
    "Name",
    "Address",
    "Distance",
    "Last updated",
    "Comments",
];

#[derive(Debug, Default)]
pub struct Options {
    pub location: Option<MapPoint>,
    pub search: String,
    pub sort: Option<SortKey>,
    pub descending: bool,
}

pub fn render(restaurants: Result<Vec<Restaurant>, FetchError>, options: Options) -> String {
    let Options {
        location,
        search,
        sort,
        descending,
    } = options;
    let mut state = ViewState::new();
    state.restaurants_fetched(restaurants);
    state.location_resolved(
        location.ok_or_else(|| LocationError::Unavailable("no location given".into())),
    );
    state.set_search_term(search);
    if let Some(key) = sort {
        state.request_sort(key);
        if descending {
            state.request_sort(key);
        }
    }
    render_rows(&state.rows(), state.location())
}

fn cells(row: &Row, location: &LocationState) -> [String; 6] {
    let r = &row.restaurant;
    [
        if r.visited { "yes" } else { "no" }.to_owned(),
        r.name.clone(),
        r.address.clone(),
        distance_label(row.distance, location),
        r.last_updated
            .map(|ts| ts.to_short_string())
            .unwrap_or_default(),
        r.comments.clone().unwrap_or_default(),
    ]
}

fn render_rows(rows: &[Row], location: &LocationState) -> String {
    let lines: Vec<[String; 6]> = rows.iter().map(|row| cells(row, location)).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut out = String::new();
    write_line(&mut out, &HEADERS, &widths);
    let separator = widths.map(|w| "-".repeat(w));
    write_line(&mut out, &separator, &widths);
    for line in &lines {
        write_line(&mut out, line, &widths);
    }
    out
}

fn write_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstable_entities::builders::*;

    fn restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::build()
                .id("1")
                .name("Bar Cañete")
                .address("Carrer de la Unió 17")
                .lat_lng(41.3796, 2.1734)
                .visited(true)
                .finish(),
            Restaurant::build()
                .id("2")
                .name("Alkimia")
                .address("Ronda de Sant Antoni 41")
                .comments(Some("Tasting menu"))
                .last_updated("2024-06-01T12:30:00Z")
                .finish(),
        ]
    }

    fn names(table: &str) -> Vec<&str> {
        table
            .lines()
            .skip(2)
            .map(|line| line.split(" | ").nth(1).unwrap().trim())
            .collect()
    }

    #[test]
    fn render_header_and_rows() {
        let table = render(Ok(restaurants()), Options::default());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(4, lines.len());
        assert!(lines[0].starts_with("Visited | Name"));
        assert!(lines[1].starts_with("------- | ----"));
        assert!(lines[2].starts_with("yes     | Bar Cañete"));
        assert!(lines[3].contains("01/06/2024 12:30 | Tasting menu"));
    }

    #[test]
    fn unknown_distances_without_location() {
        let table = render(Ok(restaurants()), Options::default());
        assert!(table.lines().skip(2).all(|line| line.contains("| - ")));
    }

    #[test]
    fn distances_and_sorting() {
        let options = Options {
            location: Some(MapPoint::from_lat_lng_deg(41.3796, 2.1734)),
            sort: Some(SortKey::Distance),
            descending: true,
            ..Default::default()
        };
        let table = render(Ok(restaurants()), options);
        assert_eq!(vec!["Alkimia", "Bar Cañete"], names(&table));
        assert!(table.contains("| 0 m"));
    }

    #[test]
    fn filter_by_search_term() {
        let options = Options {
            search: "tasting".into(),
            ..Default::default()
        };
        let table = render(Ok(restaurants()), options);
        assert_eq!(vec!["Alkimia"], names(&table));
    }

    #[test]
    fn render_only_the_header_on_failure() {
        let table = render(Err(FetchError::Status(500)), Options::default());
        assert_eq!(2, table.lines().count());
    }
}

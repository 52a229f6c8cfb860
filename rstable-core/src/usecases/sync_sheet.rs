use super::prelude::*;
use crate::gateways::sheet::{rows_by_header, Column, SheetGateway, SheetRow};

/// Replace all stored restaurants with the rows of the spreadsheet.
///
/// Returns the number of stored restaurants.
pub fn sync_sheet<R, G>(repo: &R, sheet: &G, synced_at: Timestamp) -> Result<usize>
where
    R: RestaurantRepo,
    G: SheetGateway,
{
    let rows = rows_by_header(sheet.fetch_rows()?);
    log::info!("Read {} rows from the spreadsheet", rows.len());
    let restaurants: Vec<_> = rows
        .iter()
        .map(|row| restaurant_from_row(row, synced_at))
        .collect();
    repo.replace_all_restaurants(&restaurants)?;
    Ok(restaurants.len())
}

pub fn restaurant_from_row(row: &SheetRow, synced_at: Timestamp) -> Restaurant {
    let id = row.non_empty(Column::Id).map(Id::from).unwrap_or_else(Id::new);
    let visited = row.get(Column::Visited).eq_ignore_ascii_case("true");
    let opening_hours = row.non_empty(Column::OpeningHours).map(|hours| {
        hours
            .split('|')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    });
    let pos = parse_degrees(row.get(Column::Lat))
        .zip(parse_degrees(row.get(Column::Lng)))
        .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng))
        .filter(|pos| !pos.is_unknown());
    Restaurant {
        id,
        name: row.get(Column::Name).to_owned(),
        address: row.get(Column::Address).to_owned(),
        visited,
        comments: row.non_empty(Column::Comments).map(ToOwned::to_owned),
        pos,
        google_maps_url: row.non_empty(Column::GoogleMapsUrl).map(ToOwned::to_owned),
        place_id: row.non_empty(Column::PlaceId).map(ToOwned::to_owned),
        opening_hours,
        last_updated: Some(synced_at),
    }
}

// An unparsable value means there is no position.
fn parse_degrees(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|deg| deg.is_finite())
}

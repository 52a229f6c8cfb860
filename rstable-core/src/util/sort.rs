use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Address,
    Comments,
    Distance,
    Visited,
    LastUpdated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sorting {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Visited,
        SortKey::Name,
        SortKey::Address,
        SortKey::Comments,
        SortKey::Distance,
        SortKey::LastUpdated,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Comments => "comments",
            Self::Distance => "distance",
            Self::Visited => "visited",
            Self::LastUpdated => "last-updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown sort key '{0}'")]
pub struct SortKeyParseError(String);

impl FromStr for SortKey {
    type Err = SortKeyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_lowercase().as_str() {
            "name" => Self::Name,
            "address" => Self::Address,
            "comments" => Self::Comments,
            "distance" => Self::Distance,
            "visited" => Self::Visited,
            "last-updated" | "lastupdated" | "last_updated" => Self::LastUpdated,
            _ => return Err(SortKeyParseError(s.to_owned())),
        };
        Ok(key)
    }
}

impl Sorting {
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// The sorting that results from requesting to sort by `key`.
    ///
    /// Only a repeated request for the key that is currently
    /// sorted in ascending order flips the direction.
    /// Everything else starts over in ascending order.
    pub fn requested(current: Option<Sorting>, key: SortKey) -> Self {
        match current {
            Some(Sorting {
                key: current_key,
                direction: SortDirection::Ascending,
            }) if current_key == key => Self {
                key,
                direction: SortDirection::Descending,
            },
            _ => Self::ascending(key),
        }
    }
}

/// Sort the restaurants into a new sequence.
///
/// The sort is stable in both directions: descending order
/// reverses the comparison, not the sequence.
pub fn sort_restaurants<'a>(
    restaurants: &[&'a Restaurant],
    sorting: Sorting,
    viewer_pos: Option<MapPoint>,
) -> Vec<&'a Restaurant> {
    let mut sorted = restaurants.to_vec();
    sorted.sort_by(|a, b| {
        directed(
            compare_by_key(a, b, sorting.key, viewer_pos),
            sorting.direction,
        )
    });
    sorted
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Unknown distances are treated as being infinitely far away.
fn distance_or_infinite(r: &Restaurant, viewer_pos: Option<MapPoint>) -> f64 {
    r.distance_to(viewer_pos)
        .unwrap_or_else(Distance::infinite)
        .to_meters()
}

fn compare_by_key(
    a: &Restaurant,
    b: &Restaurant,
    key: SortKey,
    viewer_pos: Option<MapPoint>,
) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Address => a.address.cmp(&b.address),
        // `None` orders before `Some`
        SortKey::Comments => a.comments.cmp(&b.comments),
        SortKey::Visited => a.visited.cmp(&b.visited),
        SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
        SortKey::Distance => {
            distance_or_infinite(a, viewer_pos).total_cmp(&distance_or_infinite(b, viewer_pos))
        }
    }
}

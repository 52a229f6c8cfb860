use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Access to the location has been denied")]
    Denied,
    #[error("The location is unavailable: {0}")]
    Unavailable(String),
}

/// The location of the viewer.
///
/// Starts as [`LocationState::Pending`] and is resolved at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocationState {
    #[default]
    Pending,
    Available(MapPoint),
    Unavailable(LocationError),
}

impl LocationState {
    pub fn position(&self) -> Option<MapPoint> {
        match self {
            Self::Available(pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Resolve a pending location.
    ///
    /// Returns `true` if the state has changed. Once resolved
    /// the state is final and further results are ignored.
    pub fn resolve(&mut self, result: Result<MapPoint, LocationError>) -> bool {
        if !self.is_pending() {
            log::debug!("Ignoring location result {result:?}: already resolved");
            return false;
        }
        *self = match result {
            Ok(pos) if pos.is_valid() => {
                log::debug!("Viewer location: {pos}");
                Self::Available(pos)
            }
            Ok(pos) => {
                log::warn!("Invalid viewer location: {pos}");
                Self::Unavailable(LocationError::Unavailable(format!("invalid position {pos}")))
            }
            Err(err) => {
                log::warn!("{err}");
                Self::Unavailable(err)
            }
        };
        true
    }
}

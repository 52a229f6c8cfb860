// Low-level access to the stored restaurant collection.
// The collection is only ever loaded and replaced as a whole.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait RestaurantRepo {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
    fn replace_all_restaurants(&self, restaurants: &[Restaurant]) -> Result<()>;
}

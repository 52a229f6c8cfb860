mod error;
mod sync_sheet;
mod update_locations;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, sync_sheet::*, update_locations::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

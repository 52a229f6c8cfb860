pub mod fetch;
pub mod gateways;
pub mod location;
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod view;

pub mod entities {
    pub use rstable_entities::{geo::*, id::*, restaurant::*, time::*};
}

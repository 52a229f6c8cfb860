mod search;
mod table;
mod theme_toggle;

pub use self::{search::*, table::*, theme_toggle::*};

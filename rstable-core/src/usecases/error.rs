use crate::{gateways::sheet::SheetError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The spreadsheet could not be read: {0}")]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

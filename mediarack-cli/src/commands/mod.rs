pub(crate) mod add;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod rate;
pub(crate) mod recommend;
pub(crate) mod remove;
pub(crate) mod search;
pub(crate) mod show;

use std::path::Path;

use mediarack_catalog::{Catalog, CatalogError, Item};

use crate::error::CliError;

/// Load the catalog, treating a missing data file as an empty catalog.
/// Other load failures still propagate.
pub(crate) fn load_or_empty(path: &Path) -> Result<Catalog, CliError> {
    match Catalog::load(path) {
        Ok(catalog) => Ok(catalog),
        Err(CatalogError::NotFound(_)) => {
            log::debug!("no data file at {}, starting empty", path.display());
            Ok(Catalog::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// "Title (4.50)" line used by the ranked views.
pub(crate) fn ranked_line(item: &Item) -> String {
    format!("{} ({:.2})", item.title, item.average_rating())
}

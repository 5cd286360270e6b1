pub mod analyze;
pub mod catalog;
pub mod substances;

use std::borrow::Cow;
use std::path::Path;
use tox_core::catalog::builtin::builtin_catalog;
use tox_core::catalog::schema::Catalog;
use tox_core::error::ToxError;

/// Load the catalog named by `--catalog`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>, ToxError> {
    match path {
        Some(p) => Ok(Cow::Owned(tox_core::catalog::load_catalog(p)?)),
        None => Ok(Cow::Borrowed(builtin_catalog()?)),
    }
}

//! Error type shared by all access control operations.

use log::warn;
use thiserror::Error;


// Error //////////////////////////////////////////////////////////////////////////////////////////


/// Errors raised by `Resource`, `Role` and `AccessControl`. Invalid input is always reported
/// before anything is mutated, except for the elements of a permission list which are applied
/// one after another.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An identifier or permission was empty, or no permissions were supplied at all.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A permission was denied on a resource the role does not track.
    #[error("Missing resource {resource} on role {role}")]
    MissingResource {
        role:     String,
        resource: String,
    },

    /// A delegated operation named a role that is not registered.
    #[error("Missing role: {0}")]
    MissingRole(String),
} // enum Error

impl Error {

    /// True for the "not found" family: `MissingResource` and `MissingRole`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::MissingResource{..} | Error::MissingRole(_))
    } // is_not_found

} // impl Error

pub type Result<T> = std::result::Result<T, Error>;


// Validation /////////////////////////////////////////////////////////////////////////////////////


/// Rejects empty identifiers. `what` names the argument in the error message.
pub(crate) fn check_id(id: &str, what: &str) -> Result<()> {
    if id.is_empty() {
        warn!("rejecting empty {} identifier", what);
        return Err(Error::InvalidArgument(format!("empty {} identifier", what)));
    } // if
    Ok(())
} // check_id


// Tests //////////////////////////////////////////////////////////////////////////////////////////


// mod tests

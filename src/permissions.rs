//! The permission argument accepted by allow, deny and check operations.

use log::warn;
use crate::error::{Error, Result};


// Permissions ////////////////////////////////////////////////////////////////////////////////////


/// One permission or a list of permissions. Built implicitly from `&str`, `String`, vectors,
/// slices and arrays of either, so callers can write `role.allow("files", "read")` as well as
/// `role.allow("files", ["read", "write"])`.
///
/// The elements are not validated on construction. Each operation validates them in order, which
/// is what makes a partially applied list possible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Permissions {
    One(String),
    Many(Vec<String>),
} // enum Permissions

impl Permissions {

    /// Number of supplied permissions, duplicates included.
    pub fn len(&self) -> usize {
        match self {
            Permissions::One(_)    => 1,
            Permissions::Many(v)   => v.len(),
        } // match
    } // len

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    } // is_empty

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Permissions::One(p)  => std::slice::from_ref(p),
            Permissions::Many(v) => v.as_slice(),
        }; // match
        items.iter().map(String::as_str)
    } // iter

    /// Fails with `InvalidArgument` if nothing was supplied or the single permission is empty.
    /// Elements of a list are left to `check_all`. `op` names the operation in the error message.
    pub(crate) fn require_some(&self, op: &str) -> Result<()> {
        match self {
            Permissions::One(p) => check_permission(p, op),
            Permissions::Many(v) if v.is_empty() => {
                warn!("no permissions supplied to {}", op);
                Err(Error::InvalidArgument(format!("no permissions supplied to {}", op)))
            }, // Many
            Permissions::Many(_) => Ok(()),
        } // match
    } // require_some

    /// Fails with `InvalidArgument` on the first empty permission. Used where a call is ignored
    /// and the elements would otherwise never be looked at.
    pub(crate) fn check_all(&self, op: &str) -> Result<()> {
        self.iter().try_for_each(|p| check_permission(p, op))
    } // check_all

} // impl Permissions

/// Rejects an empty permission string. `op` names the operation in the error message.
pub(crate) fn check_permission(permission: &str, op: &str) -> Result<()> {
    if permission.is_empty() {
        warn!("rejecting empty permission in {}", op);
        return Err(Error::InvalidArgument(format!("cannot {} an empty permission", op)));
    } // if
    Ok(())
} // check_permission


// Conversions ////////////////////////////////////////////////////////////////////////////////////


impl From<&str> for Permissions {
    fn from(p: &str) -> Self {
        Permissions::One(p.to_owned())
    } // from
} // impl From<&str>

impl From<String> for Permissions {
    fn from(p: String) -> Self {
        Permissions::One(p)
    } // from
} // impl From<String>

impl From<&String> for Permissions {
    fn from(p: &String) -> Self {
        Permissions::One(p.clone())
    } // from
} // impl From<&String>

impl From<Vec<String>> for Permissions {
    fn from(v: Vec<String>) -> Self {
        Permissions::Many(v)
    } // from
} // impl From<Vec<String>>

impl From<Vec<&str>> for Permissions {
    fn from(v: Vec<&str>) -> Self {
        Permissions::Many(v.into_iter().map(String::from).collect())
    } // from
} // impl From<Vec<&str>>

impl From<&[&str]> for Permissions {
    fn from(v: &[&str]) -> Self {
        Permissions::Many(v.iter().map(|p| String::from(*p)).collect())
    } // from
} // impl From<&[&str]>

impl From<&[String]> for Permissions {
    fn from(v: &[String]) -> Self {
        Permissions::Many(v.to_vec())
    } // from
} // impl From<&[String]>

impl<const N: usize> From<[&str; N]> for Permissions {
    fn from(v: [&str; N]) -> Self {
        Permissions::Many(v.iter().map(|p| String::from(*p)).collect())
    } // from
} // impl From<[&str; N]>

impl<const N: usize> From<&[&str; N]> for Permissions {
    fn from(v: &[&str; N]) -> Self {
        Permissions::Many(v.iter().map(|p| String::from(*p)).collect())
    } // from
} // impl From<&[&str; N]>


// Tests //////////////////////////////////////////////////////////////////////////////////////////


#[cfg(test)]
mod tests {

    use super::*;
    use test_env_log::test;

    #[test]
    fn conversions() {
        assert_eq!(Permissions::One("read".into()), Permissions::from("read"));
        assert_eq!(Permissions::One("read".into()), Permissions::from(String::from("read")));
        assert_eq!(
            Permissions::Many(vec!["read".into(), "write".into()]),
            Permissions::from(["read", "write"]));
        assert_eq!(
            Permissions::Many(vec!["read".into()]),
            Permissions::from(vec!["read"]));

        let empty: Vec<&str> = vec![];
        assert!(Permissions::from(empty).is_empty());
    } // conversions

    #[test]
    fn iter() {
        let p = Permissions::from(vec!["read", "write", "read"]);

        assert_eq!(3, p.len());
        assert_eq!(vec!["read", "write", "read"], p.iter().collect::<Vec<_>>());
        assert_eq!(vec!["edit"], Permissions::from("edit").iter().collect::<Vec<_>>());
    } // iter

    #[test]
    fn validation() {
        assert!(Permissions::from("read").require_some("allow").is_ok());
        assert_eq!(
            Err(Error::InvalidArgument(String::from("no permissions supplied to allow"))),
            Permissions::from(Vec::<String>::new()).require_some("allow"));

        assert_eq!(
            Err(Error::InvalidArgument(String::from("cannot allow an empty permission"))),
            Permissions::from("").require_some("allow"));
        assert!(Permissions::from(["read", ""]).require_some("allow").is_ok());
        assert!(Permissions::from(["read", ""]).check_all("allow").is_err());
        assert!(Permissions::from(["read", "write"]).check_all("allow").is_ok());

        assert!(check_permission("read", "check").is_ok());
        assert_eq!(
            Err(Error::InvalidArgument(String::from("cannot check an empty permission"))),
            check_permission("", "check"));
    } // validation

} // mod tests

//! A protectable resource and its permission allow-list.

use log::trace;
use std::collections::BTreeSet;
use crate::error::{check_id, Result};
use crate::permissions::{check_permission, Permissions};


// Resource ///////////////////////////////////////////////////////////////////////////////////////


/// Holds the permissions granted on one resource.
///
/// A resource without any permission is *open*: every check against it succeeds. As soon as one
/// permission is allowed it becomes *restricted* and only the listed permissions pass. Denying
/// the last permission makes it open again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    id:      String,
    allowed: BTreeSet<String>,
} // struct Resource

impl Resource {

    /// Creates an open resource. Returns an error if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        trace!("creating resource {}", id);
        check_id(&id, "resource")?;
        Ok(Resource{id, allowed: BTreeSet::new()})
    } // new

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    } // id

    /// Number of allowed permissions.
    #[inline]
    pub fn len(&self) -> usize {
        self.allowed.len()
    } // len

    /// Returns true if no permission is allowed, which means every permission passes.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    } // is_open

    /// Allowed permissions in lexical order.
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    } // permissions

    /// Adds one or more permissions. Duplicates are ignored.
    ///
    /// Returns an error if no permission is supplied or one of them is empty. The list is applied
    /// in order, so permissions in front of an empty one stay allowed.
    pub fn allow<P: Into<Permissions>>(&mut self, permissions: P) -> Result<()> {
        let permissions = permissions.into();

        trace!("allowing {:?} on resource {}", permissions, self.id);
        permissions.require_some("allow")?;
        for permission in permissions.iter() {
            check_permission(permission, "allow")?;
            if !self.allowed.contains(permission) {
                self.allowed.insert(String::from(permission));
            } // if
        } // for
        Ok(())
    } // allow

    /// Removes a permission. Unknown permissions are ignored. Returns an error if `permission`
    /// is empty.
    pub fn deny(&mut self, permission: &str) -> Result<()> {
        trace!("denying {} on resource {}", permission, self.id);
        check_permission(permission, "deny")?;
        self.allowed.remove(permission);
        Ok(())
    } // deny

    /// Returns true if the resource is open or `permission` is allowed. Returns an error if
    /// `permission` is empty.
    pub fn check(&self, permission: &str) -> Result<bool> {
        trace!("checking {} on resource {}", permission, self.id);
        check_permission(permission, "check")?;
        Ok(self.is_open() || self.allowed.contains(permission))
    } // check

} // impl Resource


// Tests //////////////////////////////////////////////////////////////////////////////////////////


#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::Error;
    use test_env_log::test;

    const TEST_ID: &str = "test_resource";
    const VALID_PERMISSIONS: [&str; 2] = ["read", "write"];
    const UNIQUE_PERMISSION: &str = "unique";

    #[test]
    fn new() {
        assert!(Resource::new("").is_err());

        for id in &["test", "1111", "resource1"] {
            let resource = Resource::new(*id).unwrap();

            assert_eq!(*id, resource.id());
            assert!(resource.is_open());
            assert_eq!(0, resource.len());
        } // for
    } // new

    #[test]
    fn check() {
        let mut resource = Resource::new(TEST_ID).unwrap();

        assert!(resource.check("").is_err());

        // open resources pass every check
        for permission in &VALID_PERMISSIONS {
            assert_eq!(Ok(true), resource.check(permission));
        } // for

        resource.allow(UNIQUE_PERMISSION).unwrap();

        for permission in &VALID_PERMISSIONS {
            assert_eq!(Ok(false), resource.check(permission));
        } // for
        assert_eq!(Ok(true), resource.check(UNIQUE_PERMISSION));
    } // check

    #[test]
    fn allow() {
        let mut resource = Resource::new(TEST_ID).unwrap();

        assert!(resource.allow("").is_err());
        assert!(resource.allow(Vec::<String>::new()).is_err());
        assert!(resource.is_open());

        for permission in &VALID_PERMISSIONS {
            assert!(resource.allow(*permission).is_ok());
        } // for
        assert_eq!(VALID_PERMISSIONS.len(), resource.len());

        // duplicates are ignored
        assert!(resource.allow(VALID_PERMISSIONS).is_ok());
        assert_eq!(VALID_PERMISSIONS.len(), resource.len());
        assert_eq!(vec!["read", "write"], resource.permissions().collect::<Vec<_>>());
    } // allow

    #[test]
    fn allow_partial_list() {
        let mut resource = Resource::new(TEST_ID).unwrap();

        assert_eq!(
            Err(Error::InvalidArgument(String::from("cannot allow an empty permission"))),
            resource.allow(["", "read"]));
        assert_eq!(0, resource.len());

        // the permission in front of the empty one stays allowed
        assert!(resource.allow(["read", "", "write"]).is_err());
        assert_eq!(1, resource.len());
        assert_eq!(Ok(true), resource.check("read"));
        assert_eq!(Ok(false), resource.check("write"));
    } // allow_partial_list

    #[test]
    fn deny() {
        let mut resource = Resource::new(TEST_ID).unwrap();

        assert!(resource.deny("").is_err());

        // nothing to remove from an open resource
        for permission in &VALID_PERMISSIONS {
            assert!(resource.deny(permission).is_ok());
            assert_eq!(0, resource.len());
        } // for

        resource.allow(VALID_PERMISSIONS).unwrap();
        resource.allow(UNIQUE_PERMISSION).unwrap();
        assert_eq!(VALID_PERMISSIONS.len() + 1, resource.len());

        for permission in &VALID_PERMISSIONS {
            assert_eq!(Ok(true), resource.check(permission));
        } // for
        for permission in &VALID_PERMISSIONS {
            resource.deny(permission).unwrap();
            assert_eq!(Ok(false), resource.check(permission));
        } // for

        assert_eq!(1, resource.len());
        assert_eq!(Ok(true), resource.check(UNIQUE_PERMISSION));

        // unknown permissions leave a restricted resource as it is
        resource.deny("missing").unwrap();
        assert_eq!(1, resource.len());
        assert_eq!(vec![UNIQUE_PERMISSION], resource.permissions().collect::<Vec<_>>());
        assert_eq!(Ok(false), resource.check("missing"));

        // back to open once the last permission is gone
        resource.deny(UNIQUE_PERMISSION).unwrap();
        assert!(resource.is_open());
        assert_eq!(Ok(true), resource.check("anything"));
    } // deny

} // mod tests

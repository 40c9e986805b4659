//! Roles and the permissions they hold on resources.
//!
//! # Resource states
//!
//! For every resource identifier a standard role is in one of three states:
//!
//! * *absent*: the role does not know the resource and every check fails.
//! * *open*: the resource is tracked without any permission and every check passes. This is
//!   blanket access on that single resource, entered through [`Role::allow_all`].
//! * *restricted*: the resource is tracked with at least one permission and only those pass.
//!   Entered by [`Role::allow`] on an absent resource.
//!
//! > *Open resources are never narrowed*:
//! > `allow` on an open resource is silently ignored, and `deny` of single permissions on an open
//! > resource does nothing. Only [`Role::deny_all`] takes blanket access away again.
//!
//! Denying the last permission of a restricted resource drops the resource, so it becomes absent
//! rather than open.

use log::{debug, trace, warn};
use std::collections::BTreeMap;
use crate::error::{check_id, Error, Result};
use crate::permissions::Permissions;
use crate::resource::Resource;


// Kind ///////////////////////////////////////////////////////////////////////////////////////////


/// Administrators hold no resources at all, they are granted everything.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
    Standard(BTreeMap<String, Resource>),
    Admin,
} // enum Kind


// Role ///////////////////////////////////////////////////////////////////////////////////////////


/// A named principal holding permissions on resources, or an administrator which is granted every
/// permission on every resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Role {
    id:   String,
    kind: Kind,
} // struct Role

impl Role {

    /// Creates a standard role without any resources. Returns an error if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        trace!("creating role {}", id);
        check_id(&id, "role")?;
        Ok(Role{id, kind: Kind::Standard(BTreeMap::new())})
    } // new

    /// Creates an administrator role. There is no way to turn a standard role into an
    /// administrator or back.
    pub fn create_admin(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        trace!("creating admin role {}", id);
        check_id(&id, "role")?;
        Ok(Role{id, kind: Kind::Admin})
    } // create_admin

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    } // id

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self.kind, Kind::Admin)
    } // is_admin

    /// Resources of a standard role, `None` for administrators.
    fn standard(&self) -> Option<&BTreeMap<String, Resource>> {
        match &self.kind {
            Kind::Standard(resources) => Some(resources),
            Kind::Admin               => None,
        } // match
    } // standard

    /// Returns true if the role tracks the resource. Always false for administrators.
    pub fn has_resource(&self, id: &str) -> bool {
        self.standard().map_or(false, |resources| resources.contains_key(id))
    } // has_resource

    /// Returns the tracked resource, if any.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.standard().and_then(|resources| resources.get(id))
    } // resource

    /// Tracked resources ordered by identifier. Empty for administrators.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.standard().into_iter().flat_map(|resources| resources.values())
    } // resources

    /// Allows permissions on a resource, creating the resource if needed.
    ///
    /// Returns an error if `resource_id` is empty, no permission is supplied or one of them is
    /// empty, whatever the kind of the role. Administrators ignore the call. If the resource is
    /// open the call is ignored as well, see the module documentation. Permissions are applied in
    /// order, an empty one fails the call but keeps the permissions in front of it.
    pub fn allow<P: Into<Permissions>>(&mut self, resource_id: &str, permissions: P) -> Result<()> {
        let permissions = permissions.into();

        trace!("allowing {:?} on {} for role {}", permissions, resource_id, self.id);
        check_id(resource_id, "resource")?;
        permissions.require_some("allow")?;

        let role_id = &self.id;
        let resources = match self.kind {
            Kind::Standard(ref mut resources) => resources,
            Kind::Admin => {
                permissions.check_all("allow")?;
                debug!("role {} is an administrator, ignoring allow", role_id);
                return Ok(());
            }, // Admin
        }; // match

        match resources.get_mut(resource_id) {
            Some(resource) if resource.is_open() => {
                permissions.check_all("allow")?;
                debug!("resource {} is open for role {}, ignoring allow", resource_id, role_id);
                Ok(())
            }, // Some
            Some(resource) => resource.allow(permissions),
            None => {
                let mut resource = Resource::new(resource_id)?;
                let result = resource.allow(permissions);

                // a list failing on its first element must not leave an open resource behind
                if !resource.is_open() {
                    resources.insert(String::from(resource_id), resource);
                } // if
                result
            }, // None
        } // match
    } // allow

    /// Grants blanket access on a single resource by tracking it as open.
    ///
    /// A restricted resource is left as it is. Administrators ignore the call. Returns an error if
    /// `resource_id` is empty.
    pub fn allow_all(&mut self, resource_id: &str) -> Result<()> {
        trace!("allowing everything on {} for role {}", resource_id, self.id);
        check_id(resource_id, "resource")?;

        let role_id = &self.id;
        let resources = match self.kind {
            Kind::Standard(ref mut resources) => resources,
            Kind::Admin => {
                debug!("role {} is an administrator, ignoring allow_all", role_id);
                return Ok(());
            }, // Admin
        }; // match

        if let Some(resource) = resources.get(resource_id) {
            if !resource.is_open() {
                debug!("resource {} is restricted for role {}, ignoring allow_all", resource_id, role_id);
            } // if
            return Ok(());
        } // if
        resources.insert(String::from(resource_id), Resource::new(resource_id)?);
        Ok(())
    } // allow_all

    /// Denies permissions on a tracked resource. Returns the role for chaining.
    ///
    /// Returns an error if `resource_id` is empty, a permission is empty, or a standard role does
    /// not track the resource. An empty list is an error as well rather than a no-op, use
    /// `deny_all` to drop the whole resource. Administrators and open resources ignore the call
    /// but still reject empty permissions. The resource is dropped once its last permission is
    /// denied.
    pub fn deny<P: Into<Permissions>>(&mut self, resource_id: &str, permissions: P) -> Result<&mut Self> {
        let permissions = permissions.into();

        trace!("denying {:?} on {} for role {}", permissions, resource_id, self.id);
        check_id(resource_id, "resource")?;
        permissions.require_some("deny")?;
        self.deny_permissions(resource_id, &permissions)?;
        Ok(self)
    } // deny

    fn deny_permissions(&mut self, resource_id: &str, permissions: &Permissions) -> Result<()> {
        let role_id = &self.id;
        let resources = match self.kind {
            Kind::Standard(ref mut resources) => resources,
            Kind::Admin => {
                permissions.check_all("deny")?;
                debug!("role {} is an administrator, ignoring deny", role_id);
                return Ok(());
            }, // Admin
        }; // match
        let resource = match resources.get_mut(resource_id) {
            Some(resource) => resource,
            None => {
                permissions.check_all("deny")?;
                return Err(missing_resource(role_id, resource_id));
            }, // None
        }; // match

        if resource.is_open() {
            permissions.check_all("deny")?;
            debug!("resource {} is open for role {}, ignoring deny", resource_id, role_id);
            return Ok(());
        } // if

        let result = permissions.iter().try_for_each(|permission| resource.deny(permission));

        // also runs after a failing list, earlier permissions may have emptied the resource
        if resource.is_open() {
            trace!("dropping resource {} from role {}", resource_id, role_id);
            resources.remove(resource_id);
        } // if
        result
    } // deny_permissions

    /// Drops a tracked resource with all its permissions. Returns the role for chaining.
    ///
    /// Returns an error if `resource_id` is empty or a standard role does not track the resource.
    /// Administrators ignore the call.
    pub fn deny_all(&mut self, resource_id: &str) -> Result<&mut Self> {
        trace!("denying everything on {} for role {}", resource_id, self.id);
        check_id(resource_id, "resource")?;
        self.drop_resource(resource_id)?;
        Ok(self)
    } // deny_all

    fn drop_resource(&mut self, resource_id: &str) -> Result<()> {
        let role_id = &self.id;

        match self.kind {
            Kind::Standard(ref mut resources) => match resources.remove(resource_id) {
                Some(_) => Ok(()),
                None    => Err(missing_resource(role_id, resource_id)),
            }, // Standard
            Kind::Admin => {
                debug!("role {} is an administrator, ignoring deny_all", role_id);
                Ok(())
            }, // Admin
        } // match
    } // drop_resource

    /// Returns true if the role may perform all of `permissions` on the resource.
    ///
    /// Administrators pass every check. Unknown resources fail, open resources pass. A list
    /// passes only if every element passes and stops at the first failure, so an empty list
    /// fails. Returns an error if `resource_id` or a checked permission is empty.
    pub fn check<P: Into<Permissions>>(&self, resource_id: &str, permissions: P) -> Result<bool> {
        let permissions = permissions.into();

        trace!("checking {:?} on {} for role {}", permissions, resource_id, self.id);
        check_id(resource_id, "resource")?;

        let resources = match self.standard() {
            Some(resources) => resources,
            None            => return Ok(true),
        }; // match
        let resource = match resources.get(resource_id) {
            Some(resource) => resource,
            None           => return Ok(false),
        }; // match

        match permissions {
            Permissions::One(permission) => resource.check(&permission),
            Permissions::Many(list) => {
                if list.is_empty() {
                    return Ok(false);
                } // if
                for permission in &list {
                    if !resource.check(permission)? {
                        return Ok(false);
                    } // if
                } // for
                Ok(true)
            }, // Many
        } // match
    } // check

} // impl Role

fn missing_resource(role: &str, resource: &str) -> Error {
    warn!("missing resource {} on role {}", resource, role);
    Error::MissingResource{role: String::from(role), resource: String::from(resource)}
} // missing_resource


// Tests //////////////////////////////////////////////////////////////////////////////////////////


// mod tests

//! The registry of roles and entry point for permission checks.

use log::{debug, trace, warn};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use crate::error::{check_id, Error, Result};
use crate::permissions::Permissions;
use crate::role::Role;


// AccessControl //////////////////////////////////////////////////////////////////////////////////


/// Owns the registered roles, at most one per identifier. Roles are enumerated in the order they
/// were created.
///
/// There is no internal locking. Share an `AccessControl` between threads by wrapping it, e.g. in
/// a `Mutex`.
#[derive(Clone, Debug, Default)]
pub struct AccessControl {
    roles: HashMap<String, Role>,
    order: Vec<String>,
} // struct AccessControl

impl AccessControl {

    pub fn new() -> Self {
        trace!("creating new access control");
        AccessControl::default()
    } // new

    /// Returns the standard role registered under `id`, creating it if needed. An existing role
    /// is returned as it is. Returns an error if `id` is empty.
    pub fn create_role(&mut self, id: &str) -> Result<&mut Role> {
        trace!("creating role {}", id);
        self.register(id, |id| Role::new(id))
    } // create_role

    /// Returns the role registered under `id`, creating an administrator if needed. Like
    /// `create_role` an existing role is returned as it is, even a standard one.
    pub fn create_admin(&mut self, id: &str) -> Result<&mut Role> {
        trace!("creating admin role {}", id);
        self.register(id, |id| Role::create_admin(id))
    } // create_admin

    fn register(&mut self, id: &str, make: fn(String) -> Result<Role>) -> Result<&mut Role> {
        check_id(id, "role")?;
        match self.roles.entry(String::from(id)) {
            Entry::Occupied(entry) => {
                debug!("role {} already registered", id);
                Ok(entry.into_mut())
            }, // Occupied
            Entry::Vacant(entry) => {
                let role = make(String::from(id))?;

                self.order.push(String::from(id));
                Ok(entry.insert(role))
            }, // Vacant
        } // match
    } // register

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Role> {
        self.roles.get(id)
    } // get

    #[inline]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Role> {
        self.roles.get_mut(id)
    } // get_mut

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.roles.contains_key(id)
    } // contains

    /// Removes and returns the role. Unknown roles are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Role> {
        trace!("deleting role {}", id);
        let role = self.roles.remove(id)?;

        self.order.retain(|key| key != id);
        Some(role)
    } // delete

    /// Removes all roles.
    pub fn clear(&mut self) {
        trace!("clearing {} roles", self.order.len());
        self.roles.clear();
        self.order.clear();
    } // clear

    /// Number of registered roles.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    } // len

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    } // is_empty

    /// Registered roles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.order.iter().filter_map(move |id| self.roles.get(id))
    } // iter

    /// Identifiers of the registered roles in creation order.
    pub fn role_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    } // role_ids

    /// Returns true if the role may perform all of `permissions` on the resource, see
    /// [`Role::check`]. An unknown role is denied. Returns an error if an identifier or a checked
    /// permission is empty, for an unknown role as well.
    pub fn check_permission<P: Into<Permissions>>(&self, role_id: &str, resource_id: &str, permissions: P) -> Result<bool> {
        let permissions = permissions.into();

        check_id(role_id, "role")?;
        check_id(resource_id, "resource")?;
        match self.roles.get(role_id) {
            Some(role) => role.check(resource_id, permissions),
            None => {
                permissions.check_all("check")?;
                debug!("unknown role {} denied on {}", role_id, resource_id);
                Ok(false)
            }, // None
        } // match
    } // check_permission

    /// Allows permissions for a registered role, see [`Role::allow`]. Returns an error if the
    /// role is unknown.
    pub fn allow<P: Into<Permissions>>(&mut self, role_id: &str, resource_id: &str, permissions: P) -> Result<()> {
        self.role_mut(role_id)?.allow(resource_id, permissions)
    } // allow

    /// Denies permissions for a registered role, see [`Role::deny`]. Returns an error if the
    /// role is unknown.
    pub fn deny<P: Into<Permissions>>(&mut self, role_id: &str, resource_id: &str, permissions: P) -> Result<()> {
        self.role_mut(role_id)?.deny(resource_id, permissions).map(|_| ())
    } // deny

    fn role_mut(&mut self, id: &str) -> Result<&mut Role> {
        check_id(id, "role")?;
        match self.roles.get_mut(id) {
            Some(role) => Ok(role),
            None => {
                warn!("missing role: {}", id);
                Err(Error::MissingRole(String::from(id)))
            }, // None
        } // match
    } // role_mut

} // impl AccessControl


// Tests //////////////////////////////////////////////////////////////////////////////////////////


// mod tests

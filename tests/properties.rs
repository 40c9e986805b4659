use proptest::prelude::*;
use rolegate::{AccessControl, Resource, Role};
use std::collections::BTreeSet;

fn permission() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn permissions() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(permission(), 1..8)
}

proptest! {
    /// A fresh resource is open and passes every non-empty permission.
    #[test]
    fn prop_fresh_resource_is_open(p in permission()) {
        let resource = Resource::new("files").unwrap();
        prop_assert_eq!(Ok(true), resource.check(&p));
    }

    /// After allowing a list every element passes and the size counts distinct permissions.
    #[test]
    fn prop_allow_list(perms in permissions()) {
        let mut resource = Resource::new("files").unwrap();
        resource.allow(perms.clone()).unwrap();

        for p in &perms {
            prop_assert_eq!(Ok(true), resource.check(p));
        }
        let distinct: BTreeSet<&String> = perms.iter().collect();
        prop_assert_eq!(distinct.len(), resource.len());
    }

    /// Denying exactly what was allowed drops the resource from the role.
    #[test]
    fn prop_allow_deny_round_trip(perms in permissions()) {
        let mut role = Role::new("user").unwrap();
        role.allow("files", perms.clone()).unwrap();
        prop_assert!(role.has_resource("files"));

        role.deny("files", perms).unwrap();
        prop_assert!(!role.has_resource("files"));
    }

    /// Administrators pass everything and never track a resource.
    #[test]
    fn prop_admin_passes_everything(resource in permission(), perms in permissions()) {
        let mut admin = Role::create_admin("root").unwrap();
        admin.allow(&resource, perms.clone()).unwrap();
        admin.deny(&resource, perms.clone()).unwrap();

        prop_assert_eq!(Ok(true), admin.check(&resource, perms));
        prop_assert!(!admin.has_resource(&resource));
        prop_assert_eq!(0, admin.resources().count());
    }

    /// A pair checks true iff both halves do.
    #[test]
    fn prop_list_is_conjunction(allowed in permissions(), p1 in permission(), p2 in permission()) {
        let mut role = Role::new("user").unwrap();
        role.allow("files", allowed).unwrap();

        let both = role.check("files", vec![p1.clone(), p2.clone()]).unwrap();
        let each = role.check("files", p1).unwrap() && role.check("files", p2).unwrap();
        prop_assert_eq!(each, both);
    }

    /// Creating a role twice hands back the same instance.
    #[test]
    fn prop_create_role_idempotent(id in permission()) {
        let mut access = AccessControl::new();
        let first: *const Role = access.create_role(&id).unwrap();
        let second: *const Role = access.create_role(&id).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(1, access.len());
    }
}

//! Small in-memory role based access control (RBAC) for gatekeeping inside an application.
//!
//! # Introduction
//!
//! In the sense of this implementation:
//! * a *role* is a named principal that may request access to resources.
//! * a *resource* is a named object to which access is controlled, separately for every role.
//! * a *permission* is an opaque string such as "read". Permissions are compared for equality,
//! nothing else.
//!
//! An [`AccessControl`] owns the roles, every [`Role`] owns its own [`Resource`]s and every
//! resource owns a set of allowed permissions. Nothing is shared between roles and there is no
//! inheritance among them.
//!
//! # Registering Roles
//!
//! ```rust
//! # extern crate rolegate;
//! use rolegate::AccessControl;
//!
//! let mut access = AccessControl::new();
//!
//! access.create_role("guest")?;
//! access.create_role("staff")?;
//! access.create_admin("admin")?;
//!
//! assert_eq!(3, access.len());
//! # Ok::<(), rolegate::Error>(())
//! ```
//!
//! Creating a role twice returns the role created first, so `create_role` may be used as a
//! "get or create".
//!
//! # Denied by default
//!
//! Until a permission is allowed on a resource the role does not know the resource and every
//! check on it fails. Unknown roles fail every check as well.
//!
//! ```rust
//! # extern crate rolegate;
//! # use rolegate::AccessControl;
//! # let mut access = AccessControl::new();
//! # access.create_role("staff")?;
//! assert!(!access.check_permission("staff", "newsletter", "view")?);
//! assert!(!access.check_permission("nobody", "newsletter", "view")?);
//! # Ok::<(), rolegate::Error>(())
//! ```
//!
//! # Defining Access Controls
//!
//! Permissions are allowed one at a time or as a list. A list checks true only if every
//! permission in it is allowed.
//!
//! ```rust
//! # extern crate rolegate;
//! # use rolegate::AccessControl;
//! # let mut access = AccessControl::new();
//! let staff = access.create_role("staff")?;
//!
//! staff.allow("newsletter", "view")?;
//! staff.allow("newsletter", ["edit", "submit"])?;
//!
//! assert!( staff.check("newsletter", "edit")?);
//! assert!( staff.check("newsletter", ["view", "submit"])?);
//! assert!(!staff.check("newsletter", ["view", "publish"])?);
//!
//! // deny returns the role for chaining
//! staff.deny("newsletter", "edit")?.deny("newsletter", "submit")?;
//! assert!(!staff.check("newsletter", "edit")?);
//! assert!( staff.check("newsletter", "view")?);
//! # Ok::<(), rolegate::Error>(())
//! ```
//!
//! Denying the last permission of a resource makes the role forget the resource again, so all
//! checks on it fail. `deny_all` forgets it at once.
//!
//! # Open Resources
//!
//! A resource tracked without any permission is *open* and passes every check. It is the blanket
//! access of a role on one single resource and is created by `allow_all`.
//!
//! > *Open resources are never narrowed*:
//! > Allowing a permission on an open resource is ignored, it stays open. Denying single
//! > permissions on it is ignored as well. Only `deny_all` removes blanket access.
//!
//! ```rust
//! # extern crate rolegate;
//! # use rolegate::AccessControl;
//! # let mut access = AccessControl::new();
//! let editor = access.create_role("editor")?;
//!
//! editor.allow_all("news")?;
//! editor.allow("news", "publish")?;
//!
//! assert!(editor.check("news", "archive")?);
//!
//! editor.deny_all("news")?;
//! assert!(!editor.check("news", "archive")?);
//! # Ok::<(), rolegate::Error>(())
//! ```
//!
//! # Administrators
//!
//! An administrator is created by its own constructor and can never become a standard role. It
//! passes every check on every resource, and allowing or denying anything on it is ignored.
//!
//! ```rust
//! # extern crate rolegate;
//! # use rolegate::AccessControl;
//! # let mut access = AccessControl::new();
//! access.create_admin("admin")?;
//!
//! assert!(access.check_permission("admin", "anything", "at all")?);
//! # Ok::<(), rolegate::Error>(())
//! ```
//!
//! # Errors
//!
//! Empty identifiers and empty permissions are rejected with [`Error::InvalidArgument`] before
//! anything changes, for administrators and open resources too. Lists are the exception: they are
//! applied element by element, so the elements in front of an empty permission stay applied.
//! An empty list is rejected by `allow` and `deny` alike, use `deny_all` to drop a resource.
//! Denying on a resource the role does not track fails with [`Error::MissingResource`].
//! Checking on an unknown role denies, but still rejects empty permissions.
//!
//! # Logging
//!
//! Operations are traced through the `log` facade. Install any logger, e.g. `env_logger`, and set
//! `RUST_LOG=rolegate=trace` to follow them.

mod access_control;
mod error;
mod permissions;
mod resource;
mod role;

pub use access_control::AccessControl;
pub use error::{Error, Result};
pub use permissions::Permissions;
pub use resource::Resource;
pub use role::Role;

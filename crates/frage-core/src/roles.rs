//! Role hierarchy for the portal.
//!
//! Roles form four tiers: `master_admin > admin`, `master_teacher > teacher`,
//! `campus` and `parent`. `unknown` is produced for role labels this build
//! does not recognise; it sits below every tier and is never granted access
//! unless a route explicitly lists it.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MasterAdmin = 0,
    Admin = 1,
    MasterTeacher = 2,
    Teacher = 3,
    Campus = 4,
    Parent = 5,
    Unknown = 6,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::MasterAdmin,
        Role::Admin,
        Role::MasterTeacher,
        Role::Teacher,
        Role::Campus,
        Role::Parent,
        Role::Unknown,
    ];

    /// Parse a stored role label. Never fails: unrecognised labels become
    /// [`Role::Unknown`].
    pub fn parse(label: &str) -> Role {
        match label {
            "master_admin" => Role::MasterAdmin,
            "admin" => Role::Admin,
            "master_teacher" => Role::MasterTeacher,
            "teacher" => Role::Teacher,
            "campus" => Role::Campus,
            "parent" => Role::Parent,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::MasterAdmin => "master_admin",
            Role::Admin => "admin",
            Role::MasterTeacher => "master_teacher",
            Role::Teacher => "teacher",
            Role::Campus => "campus",
            Role::Parent => "parent",
            Role::Unknown => "unknown",
        }
    }

    /// Higher number = more privileges. `unknown` has no level.
    pub fn hierarchy_level(&self) -> Option<u8> {
        match self {
            Role::MasterAdmin => Some(5),
            Role::Admin => Some(4),
            Role::MasterTeacher => Some(3),
            Role::Teacher => Some(2),
            Role::Campus => Some(1),
            Role::Parent => Some(0),
            Role::Unknown => None,
        }
    }

    /// Check if this role has at least the access level of `minimum`.
    pub fn at_least(&self, minimum: Role) -> bool {
        match (self.hierarchy_level(), minimum.hierarchy_level()) {
            (Some(own), Some(required)) => own >= required,
            _ => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::MasterAdmin | Role::Admin)
    }

    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Role::MasterAdmin | Role::Admin | Role::MasterTeacher | Role::Teacher | Role::Campus
        )
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of roles, usable in `const` route tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    pub const ALL: RoleSet = RoleSet::of(&Role::ALL);
    pub const ADMINS: RoleSet = RoleSet::of(&[Role::MasterAdmin, Role::Admin]);
    pub const STAFF: RoleSet = RoleSet::of(&[
        Role::MasterAdmin,
        Role::Admin,
        Role::MasterTeacher,
        Role::Teacher,
        Role::Campus,
    ]);

    pub const fn of(roles: &[Role]) -> RoleSet {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        RoleSet(bits)
    }

    pub const fn with(self, role: Role) -> RoleSet {
        RoleSet(self.0 | role.bit())
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::EMPTY, RoleSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        for role in Role::ALL {
            if role != Role::Unknown {
                assert_eq!(Role::parse(role.as_str()), role);
            }
        }
    }

    #[test]
    fn test_parse_unrecognised_is_unknown() {
        assert_eq!(Role::parse("superuser"), Role::Unknown);
        assert_eq!(Role::parse("Admin"), Role::Unknown);
        assert_eq!(Role::parse(""), Role::Unknown);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::MasterTeacher).unwrap();
        assert_eq!(json, r#""master_teacher""#);
        let role: Role = serde_json::from_str(r#""campus""#).unwrap();
        assert_eq!(role, Role::Campus);
    }

    #[test]
    fn test_hierarchy_ordering() {
        assert!(Role::MasterAdmin.at_least(Role::Admin));
        assert!(Role::Admin.at_least(Role::MasterTeacher));
        assert!(Role::MasterTeacher.at_least(Role::Teacher));
        assert!(Role::Teacher.at_least(Role::Campus));
        assert!(Role::Campus.at_least(Role::Parent));
        assert!(!Role::Parent.at_least(Role::Campus));
        assert!(!Role::Unknown.at_least(Role::Parent));
        assert!(!Role::Admin.at_least(Role::Unknown));
    }

    #[test]
    fn test_role_set_membership() {
        let set = RoleSet::of(&[Role::Admin, Role::MasterAdmin]);
        assert!(set.contains(Role::Admin));
        assert!(set.contains(Role::MasterAdmin));
        assert!(!set.contains(Role::Teacher));
        assert_eq!(set, RoleSet::ADMINS);
    }

    #[test]
    fn test_role_set_all_and_empty() {
        for role in Role::ALL {
            assert!(RoleSet::ALL.contains(role));
            assert!(!RoleSet::EMPTY.contains(role));
        }
        assert!(RoleSet::EMPTY.is_empty());
        assert_eq!(RoleSet::ALL.iter().count(), 7);
    }

    #[test]
    fn test_role_set_from_iter_and_debug() {
        let set: RoleSet = [Role::Teacher, Role::Campus].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{Teacher, Campus}");
    }
}

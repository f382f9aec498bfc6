//! Route table mapping path patterns to the roles allowed to call them.
//!
//! Every request passes through one enforcement point
//! ([`crate::middleware::role::enforce_route_policy`]) that looks the path
//! up here, so a new route is protected by declaring it rather than by
//! remembering to call the guard in its handler.
//!
//! Patterns are matched segment by segment:
//!
//! - a literal segment matches itself
//! - `{name}` matches any single segment
//! - a trailing `*` matches zero or more remaining segments
//!
//! The most specific matching rule wins (most literal segments, then exact
//! over wildcard). Paths that match no rule fail closed.

use frage_core::{Role, RoleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Roles(RoleSet),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
    Rest,
}

#[derive(Debug, Clone)]
struct Rule {
    pattern: String,
    segments: Vec<Segment>,
    access: Access,
}

impl Rule {
    fn new(pattern: &str, access: Access) -> Self {
        let segments = split(pattern)
            .map(|segment| match segment {
                "*" => Segment::Rest,
                s if s.starts_with('{') && s.ends_with('}') => Segment::Param,
                s => Segment::Literal(s.to_string()),
            })
            .collect();

        Self {
            pattern: pattern.to_string(),
            segments,
            access,
        }
    }

    fn matches(&self, path: &[&str]) -> bool {
        let mut remaining = path.iter();
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::Param => {
                    if remaining.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(literal) => {
                    if remaining.next() != Some(&literal.as_str()) {
                        return false;
                    }
                }
            }
        }
        remaining.next().is_none()
    }

    /// (literal segments, is exact) - larger is more specific.
    fn specificity(&self) -> (usize, bool) {
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        let exact = !self.segments.contains(&Segment::Rest);
        (literals, exact)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: Vec<Rule>,
}

impl RoutePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn public(mut self, pattern: &str) -> Self {
        self.rules.push(Rule::new(pattern, Access::Public));
        self
    }

    pub fn allow(mut self, pattern: &str, roles: RoleSet) -> Self {
        self.rules.push(Rule::new(pattern, Access::Roles(roles)));
        self
    }

    /// Access rule for a request path. Unmatched paths allow no role.
    pub fn access_for(&self, path: &str) -> Access {
        let segments: Vec<&str> = split(path).collect();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&segments))
            .max_by_key(|rule| rule.specificity())
            .map(|rule| rule.access)
            .unwrap_or(Access::Roles(RoleSet::EMPTY))
    }

    /// Declared patterns in insertion order, for diagnostics.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, Access)> {
        self.rules.iter().map(|rule| (rule.pattern.as_str(), rule.access))
    }

    /// The portal's route table.
    pub fn default_table() -> Self {
        RoutePolicy::new()
            .public("/health")
            .public("/metrics")
            .public("/swagger-ui/*")
            .public("/api-docs/*")
            .allow("/api/me", RoleSet::ALL)
            .allow("/api/teachers/*", RoleSet::STAFF)
            .allow("/api/roles/resolve", RoleSet::ADMINS)
            .allow(
                "/api/roles/policy",
                RoleSet::of(&[Role::MasterAdmin]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let policy = RoutePolicy::new().allow("/api/me", RoleSet::ALL);
        assert_eq!(policy.access_for("/api/me"), Access::Roles(RoleSet::ALL));
        assert_eq!(policy.access_for("/api/me/"), Access::Roles(RoleSet::ALL));
        assert_eq!(
            policy.access_for("/api/me/extra"),
            Access::Roles(RoleSet::EMPTY)
        );
    }

    #[test]
    fn test_wildcard_matches_prefix_and_below() {
        let policy = RoutePolicy::new().allow("/api/teachers/*", RoleSet::STAFF);
        assert_eq!(
            policy.access_for("/api/teachers"),
            Access::Roles(RoleSet::STAFF)
        );
        assert_eq!(
            policy.access_for("/api/teachers/7f1c/classes"),
            Access::Roles(RoleSet::STAFF)
        );
        assert_eq!(
            policy.access_for("/api/teacherships"),
            Access::Roles(RoleSet::EMPTY)
        );
    }

    #[test]
    fn test_param_segment() {
        let policy = RoutePolicy::new().allow("/api/classes/{id}/attendance", RoleSet::STAFF);
        assert_eq!(
            policy.access_for("/api/classes/42/attendance"),
            Access::Roles(RoleSet::STAFF)
        );
        assert_eq!(
            policy.access_for("/api/classes/attendance"),
            Access::Roles(RoleSet::EMPTY)
        );
    }

    #[test]
    fn test_most_specific_rule_wins() {
        let policy = RoutePolicy::new()
            .allow("/api/*", RoleSet::ALL)
            .allow("/api/admin/*", RoleSet::ADMINS)
            .public("/api/admin/ping");

        assert_eq!(policy.access_for("/api/notices"), Access::Roles(RoleSet::ALL));
        assert_eq!(
            policy.access_for("/api/admin/users"),
            Access::Roles(RoleSet::ADMINS)
        );
        assert_eq!(policy.access_for("/api/admin/ping"), Access::Public);
    }

    #[test]
    fn test_exact_beats_wildcard_at_same_depth() {
        let policy = RoutePolicy::new()
            .allow("/api/roles/*", RoleSet::ADMINS)
            .allow("/api/roles", RoleSet::ALL);
        assert_eq!(policy.access_for("/api/roles"), Access::Roles(RoleSet::ALL));
    }

    #[test]
    fn test_unmatched_fails_closed() {
        let policy = RoutePolicy::default_table();
        assert_eq!(
            policy.access_for("/api/unknown"),
            Access::Roles(RoleSet::EMPTY)
        );
        assert_eq!(policy.access_for("/"), Access::Roles(RoleSet::EMPTY));
    }

    #[test]
    fn test_default_table() {
        let policy = RoutePolicy::default_table();
        assert_eq!(policy.access_for("/health"), Access::Public);
        assert_eq!(policy.access_for("/swagger-ui"), Access::Public);
        assert_eq!(policy.access_for("/swagger-ui/index.html"), Access::Public);
        assert_eq!(policy.access_for("/api-docs/openapi.json"), Access::Public);
        assert_eq!(
            policy.access_for("/api/roles/resolve"),
            Access::Roles(RoleSet::ADMINS)
        );
        assert_eq!(
            policy.access_for("/api/teachers/abc"),
            Access::Roles(RoleSet::STAFF)
        );
    }
}

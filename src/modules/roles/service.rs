use frage_auth::Principal;

use crate::access::{RoleResolver, RoutePolicy};
use crate::modules::roles::model::{PolicyEntry, ResolveRoleRequest, ResolveRoleResponse};

pub struct RoleService;

impl RoleService {
    pub async fn resolve(resolver: &RoleResolver, dto: ResolveRoleRequest) -> ResolveRoleResponse {
        let principal = Principal::new(dto.id, dto.email, dto.metadata_role);
        resolver.resolve(&principal).await.into()
    }

    pub fn policy_entries(policy: &RoutePolicy) -> Vec<PolicyEntry> {
        policy
            .patterns()
            .map(|(pattern, access)| PolicyEntry::new(pattern, access))
            .collect()
    }
}

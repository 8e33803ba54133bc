//! Membership repository: role lookups and permission checks.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::memberships_sea;
use crate::entities::memberships::{self, MemberRole};
use crate::error::AppError;

/// Rank used for role comparisons; higher ranks include lower ones.
fn role_rank(role: MemberRole) -> u8 {
    match role {
        MemberRole::Owner => 3,
        MemberRole::Coach => 2,
        MemberRole::Member => 1,
    }
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<Option<memberships::Model>, AppError> {
    Ok(memberships_sea::find_by_club_and_sub(conn, club_id, user_sub).await?)
}

/// Require that the user is a member of the club with at least `min_role`.
///
/// Non-members get NOT_A_MEMBER; members below the required role get
/// INSUFFICIENT_ROLE. Both surface as 403.
pub async fn require_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
    min_role: MemberRole,
) -> Result<memberships::Model, AppError> {
    let membership = find_membership(conn, club_id, user_sub)
        .await?
        .ok_or_else(AppError::not_a_member)?;

    if role_rank(membership.role) < role_rank(min_role) {
        return Err(AppError::insufficient_role(format!(
            "Requires {min_role:?} role or higher"
        )));
    }
    Ok(membership)
}

#[cfg(test)]
mod tests {
    use super::role_rank;
    use crate::entities::memberships::MemberRole;

    #[test]
    fn owner_outranks_coach_outranks_member() {
        assert!(role_rank(MemberRole::Owner) > role_rank(MemberRole::Coach));
        assert!(role_rank(MemberRole::Coach) > role_rank(MemberRole::Member));
    }
}

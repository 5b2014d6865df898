//! Access checks bridging repositories and the pure rule table
//!
//! Services build `Resource` snapshots from repository state and run them
//! through `goals_core::access::authorize`; this guard centralizes the
//! snapshot plumbing and the Decision-to-error mapping.

use goals_core::access::{authorize, Action, Decision, Resource};
use goals_core::error::DomainError;
use goals_core::value_objects::{BoardRole, Snowflake};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authorization helper bound to a service context
pub struct AccessGuard<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessGuard<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The acting user's role on a board, if any
    pub async fn board_role(
        &self,
        board_id: Snowflake,
        actor: Snowflake,
    ) -> ServiceResult<Option<BoardRole>> {
        Ok(self.ctx.participant_repo().role_of(board_id, actor).await?)
    }

    /// Run the rule table and convert a deny into the matching error
    pub fn require(
        &self,
        actor: Snowflake,
        resource: &Resource,
        action: Action,
    ) -> ServiceResult<()> {
        match authorize(actor, resource, action, self.ctx.access_policy()) {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(DomainError::PermissionDenied(reason).into()),
            Decision::DenyCategoryDeleted => Err(DomainError::CategoryDeleted.into()),
        }
    }
}

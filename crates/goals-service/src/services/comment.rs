//! Goal comment service
//!
//! Comments live on goals and belong to their author. Only goal owners may
//! comment, and comments are the one resource that is hard-deleted.

use goals_core::access::{Action, Resource};
use goals_core::entities::GoalComment;
use goals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CommentListQuery, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};

use super::access::AccessGuard;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Goal comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on one of the caller's own goals
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        actor: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let goal_id = Snowflake::parse(&request.goal)
            .map_err(|_| ServiceError::validation(format!("Invalid goal identifier: {}", request.goal)))?;

        let goal = self
            .ctx
            .goal_repo()
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", goal_id.to_string()))?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Comment {
                owner_id: actor,
                goal_owner_id: goal.user_id,
            },
            Action::CreateComment,
        )?;

        let comment = GoalComment::new(self.ctx.generate_id(), goal.id, actor, request.text);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, goal_id = %goal.id, "Comment created");
        Ok(CommentResponse::from(comment))
    }

    /// Fetch one of the caller's comments
    #[instrument(skip(self))]
    pub async fn get_comment(
        &self,
        actor: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.owned_comment(actor, comment_id).await?;
        Ok(CommentResponse::from(comment))
    }

    /// List the caller's comments, newest first, optionally per goal
    #[instrument(skip(self, query))]
    pub async fn list_comments(
        &self,
        actor: Snowflake,
        query: &CommentListQuery,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let goal_id = match &query.goal {
            Some(raw) => Some(Snowflake::parse(raw).map_err(|_| {
                ServiceError::validation(format!("Invalid goal identifier: {raw}"))
            })?),
            None => None,
        };

        let comments = self
            .ctx
            .comment_repo()
            .find_by_user(actor, goal_id, query.limit(), query.offset())
            .await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Edit one of the caller's comments
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        actor: Snowflake,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.load_comment(comment_id).await?;
        self.require_authorship(actor, &comment, Action::UpdateComment).await?;

        comment.set_text(request.text);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Hard-delete one of the caller's comments
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, actor: Snowflake, comment_id: Snowflake) -> ServiceResult<()> {
        let comment = self.load_comment(comment_id).await?;
        self.require_authorship(actor, &comment, Action::DeleteComment).await?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    async fn owned_comment(
        &self,
        actor: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<GoalComment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.is_owner(actor))
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }

    async fn load_comment(&self, comment_id: Snowflake) -> ServiceResult<GoalComment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }

    async fn require_authorship(
        &self,
        actor: Snowflake,
        comment: &GoalComment,
        action: Action,
    ) -> ServiceResult<()> {
        let goal_owner_id = self
            .ctx
            .goal_repo()
            .find_by_id(comment.goal_id)
            .await?
            .map_or(comment.user_id, |g| g.user_id);

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Comment {
                owner_id: comment.user_id,
                goal_owner_id,
            },
            action,
        )
    }
}

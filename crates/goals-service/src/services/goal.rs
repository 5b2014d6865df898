//! Goal service
//!
//! Goals are never removed; the delete path archives them. Listings hide
//! archived goals and goals whose category has been soft-deleted.

use goals_core::access::{Action, Resource};
use goals_core::entities::{Goal, GoalCategory};
use goals_core::traits::{GoalOrdering, GoalQuery};
use goals_core::value_objects::{GoalPriority, GoalStatus, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateGoalRequest, GoalListQuery, GoalResponse, UpdateGoalRequest};

use super::access::AccessGuard;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Goal service
pub struct GoalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GoalService<'a> {
    /// Create a new GoalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a goal in a category
    ///
    /// A soft-deleted category fails with CategoryDeleted even for callers
    /// who could otherwise write to the board; missing write access is a
    /// plain permission denial.
    #[instrument(skip(self, request))]
    pub async fn create_goal(
        &self,
        actor: Snowflake,
        request: CreateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        let category_id = parse_id(&request.category, "category")?;
        let category = self.load_category(category_id).await?;

        self.require_goal_creation(actor, &category).await?;

        let mut goal = Goal::new(self.ctx.generate_id(), category.id, actor, request.title);
        goal.description = request.description;
        goal.due_date = request.due_date;
        if let Some(raw) = request.status {
            goal.status = parse_status(raw)?;
        }
        if let Some(raw) = request.priority {
            goal.priority = parse_priority(raw)?;
        }

        self.ctx.goal_repo().create(&goal).await?;

        info!(goal_id = %goal.id, category_id = %category.id, "Goal created");
        Ok(GoalResponse::from(goal))
    }

    /// Fetch one of the caller's goals
    #[instrument(skip(self))]
    pub async fn get_goal(&self, actor: Snowflake, goal_id: Snowflake) -> ServiceResult<GoalResponse> {
        let goal = self.owned_goal(actor, goal_id).await?;
        Ok(GoalResponse::from(goal))
    }

    /// List the caller's non-archived goals in live categories
    #[instrument(skip(self, query))]
    pub async fn list_goals(
        &self,
        actor: Snowflake,
        query: &GoalListQuery,
    ) -> ServiceResult<Vec<GoalResponse>> {
        let ordering = match query.ordering.as_deref() {
            None | Some("title") => GoalOrdering::TitleAsc,
            Some("created") => GoalOrdering::CreatedAsc,
            Some("-created") => GoalOrdering::CreatedDesc,
            Some(other) => {
                return Err(ServiceError::validation(format!(
                    "Unknown ordering: {other}"
                )))
            }
        };

        let repo_query = GoalQuery {
            search: query.search.clone(),
            due_date_from: query.due_date_from,
            due_date_to: query.due_date_to,
            ordering,
            limit: query.limit(),
            offset: query.offset(),
        };

        let goals = self.ctx.goal_repo().find_active(actor, &repo_query).await?;
        Ok(goals.into_iter().map(GoalResponse::from).collect())
    }

    /// Partial patch of one of the caller's goals
    #[instrument(skip(self, request))]
    pub async fn update_goal(
        &self,
        actor: Snowflake,
        goal_id: Snowflake,
        request: UpdateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        let mut goal = self.load_goal(goal_id).await?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Goal {
                owner_id: goal.user_id,
            },
            Action::UpdateGoal,
        )?;

        if let Some(raw) = request.category {
            let category_id = parse_id(&raw, "category")?;
            if category_id != goal.category_id {
                let category = self.load_category(category_id).await?;
                // Moving into a dead or unwritable category fails the same
                // way creating there would
                self.require_goal_creation(actor, &category).await?;
                goal.category_id = category.id;
            }
        }
        if let Some(title) = request.title {
            goal.title = title;
        }
        if let Some(description) = request.description {
            goal.description = Some(description);
        }
        if let Some(due_date) = request.due_date {
            goal.due_date = Some(due_date);
        }
        if let Some(raw) = request.status {
            goal.status = parse_status(raw)?;
        }
        if let Some(raw) = request.priority {
            goal.priority = parse_priority(raw)?;
        }
        goal.touch();

        self.ctx.goal_repo().update(&goal).await?;

        info!(goal_id = %goal_id, "Goal updated");
        Ok(GoalResponse::from(goal))
    }

    /// Archive a goal (the only delete path)
    ///
    /// Archiving an already-archived goal is a successful no-op.
    #[instrument(skip(self))]
    pub async fn archive_goal(&self, actor: Snowflake, goal_id: Snowflake) -> ServiceResult<()> {
        let mut goal = self.load_goal(goal_id).await?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Goal {
                owner_id: goal.user_id,
            },
            Action::ArchiveGoal,
        )?;

        if goal.archive() {
            self.ctx.goal_repo().update(&goal).await?;
            info!(goal_id = %goal_id, "Goal archived");
        }

        Ok(())
    }

    /// Load a goal the caller owns; foreign goals surface as NotFound
    async fn owned_goal(&self, actor: Snowflake, goal_id: Snowflake) -> ServiceResult<Goal> {
        self.ctx
            .goal_repo()
            .find_by_id(goal_id)
            .await?
            .filter(|g| g.is_owner(actor))
            .ok_or_else(|| ServiceError::not_found("Goal", goal_id.to_string()))
    }

    async fn load_goal(&self, goal_id: Snowflake) -> ServiceResult<Goal> {
        self.ctx
            .goal_repo()
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", goal_id.to_string()))
    }

    async fn load_category(&self, category_id: Snowflake) -> ServiceResult<GoalCategory> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))
    }

    async fn require_goal_creation(
        &self,
        actor: Snowflake,
        category: &GoalCategory,
    ) -> ServiceResult<()> {
        let guard = AccessGuard::new(self.ctx);
        let board_role = guard.board_role(category.board_id, actor).await?;
        guard.require(
            actor,
            &Resource::Category {
                owner_id: category.user_id,
                board_role,
                is_deleted: category.is_deleted,
            },
            Action::CreateGoal,
        )
    }
}

fn parse_id(raw: &str, field: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(raw)
        .map_err(|_| ServiceError::validation(format!("Invalid {field} identifier: {raw}")))
}

fn parse_status(raw: i16) -> ServiceResult<GoalStatus> {
    GoalStatus::from_i16(raw)
        .ok_or_else(|| ServiceError::validation(format!("Unknown goal status: {raw}")))
}

fn parse_priority(raw: i16) -> ServiceResult<GoalPriority> {
    GoalPriority::from_i16(raw)
        .ok_or_else(|| ServiceError::validation(format!("Unknown goal priority: {raw}")))
}

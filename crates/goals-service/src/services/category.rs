//! Goal category service
//!
//! Categories are soft-deleted: delete flips `is_deleted` and leaves the
//! row (and its goals) in place.

use goals_core::access::{Action, Resource};
use goals_core::entities::GoalCategory;
use goals_core::traits::CategoryQuery;
use goals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest, ListQuery, UpdateCategoryRequest};

use super::access::AccessGuard;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Goal category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a category on a board (owner or editor role required)
    #[instrument(skip(self, request))]
    pub async fn create_category(
        &self,
        actor: Snowflake,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let board_id = parse_id(&request.board, "board")?;

        self.ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board", board_id.to_string()))?;

        let guard = AccessGuard::new(self.ctx);
        let role = guard.board_role(board_id, actor).await?;
        guard.require(actor, &Resource::Board { role }, Action::CreateCategory)?;

        let category = GoalCategory::new(self.ctx.generate_id(), board_id, actor, request.title);
        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, board_id = %board_id, "Category created");
        Ok(CategoryResponse::from(category))
    }

    /// Fetch an owned, non-deleted category
    #[instrument(skip(self))]
    pub async fn get_category(
        &self,
        actor: Snowflake,
        category_id: Snowflake,
    ) -> ServiceResult<CategoryResponse> {
        let category = self.owned_category(actor, category_id).await?;
        Ok(CategoryResponse::from(category))
    }

    /// List the caller's non-deleted categories, title ascending
    #[instrument(skip(self, query))]
    pub async fn list_categories(
        &self,
        actor: Snowflake,
        query: &ListQuery,
    ) -> ServiceResult<Vec<CategoryResponse>> {
        let repo_query = CategoryQuery {
            search: query.search.clone(),
            limit: query.limit(),
            offset: query.offset(),
        };
        let categories = self.ctx.category_repo().find_owned(actor, &repo_query).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Rename an owned category
    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        actor: Snowflake,
        category_id: Snowflake,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = self.owned_category(actor, category_id).await?;

        category.set_title(request.title);
        self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category_id, "Category updated");
        Ok(CategoryResponse::from(category))
    }

    /// Soft-delete a category via the rule table
    ///
    /// Goals inside are untouched; they simply stop appearing in listings
    /// and reject new sub-resources.
    #[instrument(skip(self))]
    pub async fn delete_category(
        &self,
        actor: Snowflake,
        category_id: Snowflake,
    ) -> ServiceResult<()> {
        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .filter(|c| !c.is_deleted)
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        let guard = AccessGuard::new(self.ctx);
        let board_role = guard.board_role(category.board_id, actor).await?;
        guard.require(
            actor,
            &Resource::Category {
                owner_id: category.user_id,
                board_role,
                is_deleted: category.is_deleted,
            },
            Action::DeleteCategory,
        )?;

        category.mark_deleted();
        self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category_id, "Category deleted");
        Ok(())
    }

    /// Load a category owned by the caller; deleted and foreign categories
    /// both come back as NotFound
    async fn owned_category(
        &self,
        actor: Snowflake,
        category_id: Snowflake,
    ) -> ServiceResult<GoalCategory> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .filter(|c| !c.is_deleted && c.is_owner(actor))
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))
    }
}

fn parse_id(raw: &str, field: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(raw)
        .map_err(|_| ServiceError::validation(format!("Invalid {field} identifier: {raw}")))
}

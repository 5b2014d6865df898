//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use goals_core::entities::{Board, Goal, GoalCategory, GoalComment, TgAccount, User};

use super::responses::{
    BoardResponse, CategoryResponse, CommentResponse, GoalResponse, ProfileResponse,
    VerificationResponse,
};

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.to_string(),
            title: board.title.clone(),
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}

impl From<&GoalCategory> for CategoryResponse {
    fn from(category: &GoalCategory) -> Self {
        Self {
            id: category.id.to_string(),
            board: category.board_id.to_string(),
            user: category.user_id.to_string(),
            title: category.title.clone(),
            is_deleted: category.is_deleted,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<GoalCategory> for CategoryResponse {
    fn from(category: GoalCategory) -> Self {
        Self::from(&category)
    }
}

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.to_string(),
            category: goal.category_id.to_string(),
            user: goal.user_id.to_string(),
            title: goal.title.clone(),
            description: goal.description.clone(),
            due_date: goal.due_date,
            status: goal.status.as_i16(),
            priority: goal.priority.as_i16(),
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self::from(&goal)
    }
}

impl From<&GoalComment> for CommentResponse {
    fn from(comment: &GoalComment) -> Self {
        Self {
            id: comment.id.to_string(),
            goal: comment.goal_id.to_string(),
            user: comment.user_id.to_string(),
            text: comment.text.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<GoalComment> for CommentResponse {
    fn from(comment: GoalComment) -> Self {
        Self::from(&comment)
    }
}

impl From<&TgAccount> for VerificationResponse {
    fn from(account: &TgAccount) -> Self {
        Self {
            tg_username: account.tg_username.clone(),
            linked: account.is_linked(),
        }
    }
}

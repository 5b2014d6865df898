//! Entity <-> model mappers
//!
//! `From<Model>` conversions for reads. The integer enum columns fall back
//! to the domain defaults if a row somehow carries an unknown value, so a
//! bad row degrades instead of failing the whole query.

use goals_core::entities::{Board, BoardParticipant, Goal, GoalCategory, GoalComment, TgAccount, User};
use goals_core::traits::RefreshTokenRecord;
use goals_core::value_objects::{BoardRole, GoalPriority, GoalStatus, Snowflake};

use crate::models::{
    BoardModel, CategoryModel, CommentModel, GoalModel, ParticipantModel, RefreshTokenModel,
    TgAccountModel, UserModel,
};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<BoardModel> for Board {
    fn from(model: BoardModel) -> Self {
        Board {
            id: Snowflake::new(model.id),
            title: model.title,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ParticipantModel> for BoardParticipant {
    fn from(model: ParticipantModel) -> Self {
        BoardParticipant {
            board_id: Snowflake::new(model.board_id),
            user_id: Snowflake::new(model.user_id),
            role: BoardRole::from_i16(model.role).unwrap_or(BoardRole::Reader),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CategoryModel> for GoalCategory {
    fn from(model: CategoryModel) -> Self {
        GoalCategory {
            id: Snowflake::new(model.id),
            board_id: Snowflake::new(model.board_id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<GoalModel> for Goal {
    fn from(model: GoalModel) -> Self {
        Goal {
            id: Snowflake::new(model.id),
            category_id: Snowflake::new(model.category_id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            description: model.description,
            due_date: model.due_date,
            status: GoalStatus::from_i16(model.status).unwrap_or_default(),
            priority: GoalPriority::from_i16(model.priority).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentModel> for GoalComment {
    fn from(model: CommentModel) -> Self {
        GoalComment {
            id: Snowflake::new(model.id),
            goal_id: Snowflake::new(model.goal_id),
            user_id: Snowflake::new(model.user_id),
            text: model.text,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TgAccountModel> for TgAccount {
    fn from(model: TgAccountModel) -> Self {
        TgAccount {
            id: Snowflake::new(model.id),
            tg_user_id: model.tg_user_id,
            tg_chat_id: model.tg_chat_id,
            tg_username: model.tg_username,
            user_id: model.user_id.map(Snowflake::new),
            verification_code: model.verification_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<RefreshTokenModel> for RefreshTokenRecord {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshTokenRecord {
            user_id: Snowflake::new(model.user_id),
            session_id: model.session_id,
            expires_at: model.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_goal_model_unknown_enum_degrades() {
        let now = Utc::now();
        let model = GoalModel {
            id: 1,
            category_id: 2,
            user_id: 3,
            title: "t".to_string(),
            description: None,
            due_date: None,
            status: 99,
            priority: 0,
            created_at: now,
            updated_at: now,
        };
        let goal = Goal::from(model);
        assert_eq!(goal.status, GoalStatus::ToDo);
        assert_eq!(goal.priority, GoalPriority::Medium);
    }
}

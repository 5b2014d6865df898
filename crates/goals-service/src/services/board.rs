//! Board service
//!
//! Boards are the sharing boundary: participants carry per-board roles and
//! every category lives on exactly one board.

use std::collections::HashMap;

use goals_core::access::{Action, Resource};
use goals_core::entities::{Board, BoardParticipant};
use goals_core::value_objects::{BoardRole, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    BoardResponse, CreateBoardRequest, ParticipantResponse, SetParticipantsRequest,
    UpdateBoardRequest,
};

use super::access::AccessGuard;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Board service
pub struct BoardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a board; the creator becomes its owner participant
    #[instrument(skip(self, request))]
    pub async fn create_board(
        &self,
        actor: Snowflake,
        request: CreateBoardRequest,
    ) -> ServiceResult<BoardResponse> {
        let board = Board::new(self.ctx.generate_id(), request.title);
        self.ctx.board_repo().create(&board).await?;

        let owner = BoardParticipant::owner(board.id, actor);
        self.ctx.participant_repo().create(&owner).await?;

        info!(board_id = %board.id, user_id = %actor, "Board created");
        Ok(BoardResponse::from(board))
    }

    /// Fetch a board the caller participates in
    ///
    /// Non-participants get NotFound, never a 403, so board existence is
    /// not leaked.
    #[instrument(skip(self))]
    pub async fn get_board(&self, actor: Snowflake, board_id: Snowflake) -> ServiceResult<BoardResponse> {
        let (board, _) = self.participant_board(actor, board_id).await?;
        Ok(BoardResponse::from(board))
    }

    /// List the caller's boards
    #[instrument(skip(self))]
    pub async fn list_boards(&self, actor: Snowflake) -> ServiceResult<Vec<BoardResponse>> {
        let boards = self.ctx.board_repo().find_by_participant(actor).await?;
        Ok(boards.into_iter().map(BoardResponse::from).collect())
    }

    /// Rename a board (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_board(
        &self,
        actor: Snowflake,
        board_id: Snowflake,
        request: UpdateBoardRequest,
    ) -> ServiceResult<BoardResponse> {
        let (mut board, role) = self.participant_board(actor, board_id).await?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Board { role: Some(role) },
            Action::UpdateBoard,
        )?;

        board.set_title(request.title);
        self.ctx.board_repo().update(&board).await?;

        info!(board_id = %board_id, "Board updated");
        Ok(BoardResponse::from(board))
    }

    /// Soft-delete a board and cascade to its categories and goals
    #[instrument(skip(self))]
    pub async fn delete_board(&self, actor: Snowflake, board_id: Snowflake) -> ServiceResult<()> {
        let (_, role) = self.participant_board(actor, board_id).await?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Board { role: Some(role) },
            Action::DeleteBoard,
        )?;

        self.ctx.board_repo().delete(board_id).await?;

        info!(board_id = %board_id, "Board deleted");
        Ok(())
    }

    /// List a board's participants (any participant may look)
    #[instrument(skip(self))]
    pub async fn list_participants(
        &self,
        actor: Snowflake,
        board_id: Snowflake,
    ) -> ServiceResult<Vec<ParticipantResponse>> {
        let _ = self.participant_board(actor, board_id).await?;

        let participants = self.ctx.participant_repo().find_by_board(board_id).await?;
        let mut responses = Vec::with_capacity(participants.len());
        for participant in participants {
            let username = self
                .ctx
                .user_repo()
                .find_by_id(participant.user_id)
                .await?
                .map(|u| u.username)
                .unwrap_or_default();
            responses.push(ParticipantResponse {
                user_id: participant.user_id.to_string(),
                username,
                role: participant.role.as_i16(),
                created_at: participant.created_at,
            });
        }
        Ok(responses)
    }

    /// Replace the non-owner participant set (owner only)
    ///
    /// The owner is implicit: they cannot appear in the submitted list and
    /// are never demoted or removed by it.
    #[instrument(skip(self, request))]
    pub async fn set_participants(
        &self,
        actor: Snowflake,
        board_id: Snowflake,
        request: SetParticipantsRequest,
    ) -> ServiceResult<Vec<ParticipantResponse>> {
        let (_, role) = self.participant_board(actor, board_id).await?;

        let guard = AccessGuard::new(self.ctx);
        guard.require(
            actor,
            &Resource::Board { role: Some(role) },
            Action::ManageParticipants,
        )?;

        // Resolve usernames and validate roles before mutating anything
        let mut desired: HashMap<Snowflake, BoardRole> = HashMap::new();
        for entry in &request.participants {
            let role = BoardRole::from_i16(entry.role)
                .filter(|r| *r != BoardRole::Owner)
                .ok_or_else(|| {
                    ServiceError::validation(format!("Invalid participant role: {}", entry.role))
                })?;

            let user = self
                .ctx
                .user_repo()
                .find_by_username(&entry.user)
                .await?
                .ok_or_else(|| ServiceError::not_found("User", entry.user.clone()))?;

            if user.id == actor {
                return Err(ServiceError::validation(
                    "The board owner cannot change their own participation",
                ));
            }

            desired.insert(user.id, role);
        }

        let current = self.ctx.participant_repo().find_by_board(board_id).await?;
        for participant in &current {
            if participant.user_id == actor {
                continue;
            }
            match desired.remove(&participant.user_id) {
                Some(role) if role != participant.role => {
                    self.ctx
                        .participant_repo()
                        .set_role(board_id, participant.user_id, role)
                        .await?;
                }
                Some(_) => {}
                None => {
                    self.ctx
                        .participant_repo()
                        .remove(board_id, participant.user_id)
                        .await?;
                }
            }
        }

        // Whatever is left in the map is new
        for (user_id, role) in desired {
            let participant = BoardParticipant::new(board_id, user_id, role);
            self.ctx.participant_repo().create(&participant).await?;
        }

        info!(board_id = %board_id, "Participants updated");
        self.list_participants(actor, board_id).await
    }

    /// Load a board and the caller's role, failing with NotFound when the
    /// caller is not a participant
    async fn participant_board(
        &self,
        actor: Snowflake,
        board_id: Snowflake,
    ) -> ServiceResult<(Board, BoardRole)> {
        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board", board_id.to_string()))?;

        let role = self
            .ctx
            .participant_repo()
            .role_of(board_id, actor)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board", board_id.to_string()))?;

        Ok((board, role))
    }
}

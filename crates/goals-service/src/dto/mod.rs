//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    ChangePasswordRequest, CommentListQuery, ConfirmVerificationRequest, CreateBoardRequest,
    CreateCategoryRequest, CreateCommentRequest, CreateGoalRequest, GoalListQuery, ListQuery,
    LoginRequest, LogoutRequest, ParticipantUpdate, RefreshTokenRequest, SetParticipantsRequest,
    SignupRequest, UpdateBoardRequest, UpdateCategoryRequest, UpdateCommentRequest,
    UpdateGoalRequest, UpdateProfileRequest, DEFAULT_LIMIT, MAX_LIMIT,
};
pub use responses::{
    AuthResponse, BoardResponse, CategoryResponse, CommentResponse, GoalResponse,
    ParticipantResponse, ProfileResponse, VerificationResponse,
};

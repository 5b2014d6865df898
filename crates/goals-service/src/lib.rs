//! # goals-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, BoardService, CategoryService, CommentService, GoalService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService, VerificationService,
};

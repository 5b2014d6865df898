//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Signup a fresh user and return the auth response
async fn signup(server: &TestServer) -> (SignupRequest, AuthResponse) {
    let request = SignupRequest::unique();
    let response = server.post("/core/signup", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a board for the given token
async fn create_board(server: &TestServer, token: &str) -> BoardResponse {
    let request = CreateBoardRequest::unique();
    let response = server.post_auth("/board/create", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a category on a board
async fn create_category(server: &TestServer, token: &str, board_id: &str) -> CategoryResponse {
    let request = CreateCategoryRequest::unique(board_id);
    let response = server
        .post_auth("/goal_category/create", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let response = server.post("/core/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.password_repeat = "Different123".to_string();

    let response = server.post("/core/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let login_req = LoginRequest::from_signup(&request);
    let response = server.post("/core/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let login_req = LoginRequest {
        username: request.username,
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/core/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_rotates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/core/refresh", &refresh_req).await.unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!rotated.access_token.is_empty());
    assert_ne!(rotated.refresh_token, auth.refresh_token);

    // The old refresh token is now revoked
    let response = server.post("/core/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let logout_req = LogoutRequest {
        refresh_token: Some(auth.refresh_token.clone()),
    };
    let response = server
        .post_auth("/core/logout", &auth.access_token, &logout_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The revoked refresh token no longer works
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/core/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let response = server
        .get_auth("/core/profile", &auth.access_token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, auth.user.id);
    assert_eq!(profile.username, request.username);
}

#[tokio::test]
async fn test_get_profile_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/core/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let patch = serde_json::json!({"first_name": "Ada", "last_name": "Lovelace"});
    let response = server
        .patch_auth("/core/profile", &auth.access_token, &patch)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
}

#[tokio::test]
async fn test_update_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let body = serde_json::json!({
        "old_password": request.password,
        "new_password": "FreshPass456"
    });
    let response = server
        .put_auth("/core/update_password", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The old password no longer works, the new one does
    let stale_login = LoginRequest::from_signup(&request);
    let response = server.post("/core/login", &stale_login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let fresh_login = LoginRequest {
        username: request.username,
        password: "FreshPass456".to_string(),
    };
    let response = server.post("/core/login", &fresh_login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Board Tests
// ============================================================================

#[tokio::test]
async fn test_create_board() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    assert!(!board.id.is_empty());

    let response = server
        .get_auth("/board/list", &auth.access_token)
        .await
        .unwrap();
    let boards: Vec<BoardResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(boards.iter().any(|b| b.id == board.id));
}

#[tokio::test]
async fn test_board_invisible_to_non_participant() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signup(&server).await;
    let (_, stranger) = signup(&server).await;

    let board = create_board(&server, &owner.access_token).await;

    let response = server
        .get_auth(&format!("/board/{}", board.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_set_participants() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signup(&server).await;
    let (editor_signup, editor) = signup(&server).await;

    let board = create_board(&server, &owner.access_token).await;

    // Grant the second user an editor role
    let request = SetParticipantsRequest {
        participants: vec![ParticipantUpdate {
            user: editor_signup.username.clone(),
            role: 2,
        }],
    };
    let response = server
        .put_auth(
            &format!("/board/{}/participants", board.id),
            &owner.access_token,
            &request,
        )
        .await
        .unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(participants.len(), 2);

    // The editor can now see the board
    let response = server
        .get_auth(&format!("/board/{}", board.id), &editor.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Submitting an empty set strips the editor again
    let request = SetParticipantsRequest {
        participants: vec![],
    };
    let response = server
        .put_auth(
            &format!("/board/{}/participants", board.id),
            &owner.access_token,
            &request,
        )
        .await
        .unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(participants.len(), 1);

    let response = server
        .get_auth(&format!("/board/{}", board.id), &editor.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_board() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;

    let response = server
        .delete_auth(&format!("/board/{}", board.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/board/{}", board.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    assert_eq!(category.board, board.id);
    assert!(!category.is_deleted);
}

#[tokio::test]
async fn test_deleted_category_disappears_from_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    let response = server
        .delete_auth(
            &format!("/goal_category/{}", category.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/goal_category/list", &auth.access_token)
        .await
        .unwrap();
    let categories: Vec<CategoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!categories.iter().any(|c| c.id == category.id));

    let response = server
        .get_auth(
            &format!("/goal_category/{}", category.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Goal Tests
// ============================================================================

#[tokio::test]
async fn test_create_goal() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    let request = CreateGoalRequest::simple(&category.id, "Ship it");
    let response = server
        .post_auth("/goal/create", &auth.access_token, &request)
        .await
        .unwrap();
    let goal: GoalResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(goal.title, "Ship it");
    assert_eq!(goal.category, category.id);
    assert_eq!(goal.status, 1);
    assert_eq!(goal.priority, 2);
}

#[tokio::test]
async fn test_create_goal_in_deleted_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    let response = server
        .delete_auth(
            &format!("/goal_category/{}", category.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let request = CreateGoalRequest::simple(&category.id, "Too late");
    let response = server
        .post_auth("/goal/create", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_archive_goal() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    let request = CreateGoalRequest::simple(&category.id, "Ephemeral");
    let response = server
        .post_auth("/goal/create", &auth.access_token, &request)
        .await
        .unwrap();
    let goal: GoalResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/goal/{}", goal.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Archived goals stay fetchable by id but leave the listing
    let response = server
        .get_auth(&format!("/goal/{}", goal.id), &auth.access_token)
        .await
        .unwrap();
    let archived: GoalResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(archived.status, 4);

    let response = server
        .get_auth("/goal/list", &auth.access_token)
        .await
        .unwrap();
    let goals: Vec<GoalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!goals.iter().any(|g| g.id == goal.id));
}

#[tokio::test]
async fn test_goal_search_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    for title in ["Buy groceries", "Write report", "Buy stamps"] {
        let request = CreateGoalRequest::simple(&category.id, title);
        let response = server
            .post_auth("/goal/create", &auth.access_token, &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth("/goal/list?search=buy", &auth.access_token)
        .await
        .unwrap();
    let goals: Vec<GoalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(goals.len(), 2);
    assert!(goals.iter().all(|g| g.title.to_lowercase().contains("buy")));
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let board = create_board(&server, &auth.access_token).await;
    let category = create_category(&server, &auth.access_token, &board.id).await;

    let request = CreateGoalRequest::simple(&category.id, "Discussed");
    let response = server
        .post_auth("/goal/create", &auth.access_token, &request)
        .await
        .unwrap();
    let goal: GoalResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create
    let request = CreateCommentRequest {
        goal: goal.id.clone(),
        text: "First note".to_string(),
    };
    let response = server
        .post_auth("/goal_comment/create", &auth.access_token, &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.text, "First note");

    // Update
    let patch = serde_json::json!({"text": "Edited note"});
    let response = server
        .patch_auth(
            &format!("/goal_comment/{}", comment.id),
            &auth.access_token,
            &patch,
        )
        .await
        .unwrap();
    let updated: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.text, "Edited note");

    // List filtered by goal
    let response = server
        .get_auth(
            &format!("/goal_comment/list?goal={}", goal.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);

    // Delete
    let response = server
        .delete_auth(
            &format!("/goal_comment/{}", comment.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/goal_comment/{}", comment.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Bot Verification Tests
// ============================================================================

#[tokio::test]
async fn test_verify_unknown_code() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let body = serde_json::json!({"verification_code": "nosuchcode01"});
    let response = server
        .patch_auth("/bot/verify", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

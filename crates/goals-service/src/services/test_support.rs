//! In-memory fakes for service tests
//!
//! Every repository trait gets a Mutex-backed fake so services can be
//! exercised without a database. The goal fake consults the category fake
//! for the deleted-category listing filter, mirroring the SQL join.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use goals_core::access::AccessPolicy;
use goals_core::entities::{Board, BoardParticipant, Goal, GoalCategory, GoalComment, TgAccount, User};
use goals_core::error::DomainError;
use goals_core::traits::{
    BoardRepository, BotGateway, CategoryQuery, CategoryRepository, CommentRepository,
    GatewayResult, GoalOrdering, GoalQuery, GoalRepository, ParticipantRepository,
    RefreshTokenRecord, RefreshTokenRepository, RepoResult, TgAccountRepository, UserRepository,
};
use goals_core::value_objects::{BoardRole, Snowflake, SnowflakeGenerator};
use goals_common::auth::JwtService;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|(u, _)| u.username == username))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        entry.0 = user.clone();
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        entry.1 = password_hash.to_string();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeParticipantRepository {
    participants: Mutex<Vec<BoardParticipant>>,
}

#[async_trait]
impl ParticipantRepository for FakeParticipantRepository {
    async fn find(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<BoardParticipant>> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.board_id == board_id && p.user_id == user_id)
            .cloned())
    }

    async fn role_of(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<BoardRole>> {
        Ok(self.find(board_id, user_id).await?.map(|p| p.role))
    }

    async fn find_by_board(&self, board_id: Snowflake) -> RepoResult<Vec<BoardParticipant>> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.board_id == board_id)
            .cloned()
            .collect())
    }

    async fn create(&self, participant: &BoardParticipant) -> RepoResult<()> {
        let mut participants = self.participants.lock().unwrap();
        if participants
            .iter()
            .any(|p| p.board_id == participant.board_id && p.user_id == participant.user_id)
        {
            return Err(DomainError::AlreadyParticipant);
        }
        participants.push(participant.clone());
        Ok(())
    }

    async fn set_role(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
        role: BoardRole,
    ) -> RepoResult<()> {
        let mut participants = self.participants.lock().unwrap();
        let entry = participants
            .iter_mut()
            .find(|p| p.board_id == board_id && p.user_id == user_id)
            .ok_or(DomainError::UserNotFound(user_id))?;
        entry.role = role;
        Ok(())
    }

    async fn remove(&self, board_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let mut participants = self.participants.lock().unwrap();
        let before = participants.len();
        participants.retain(|p| !(p.board_id == board_id && p.user_id == user_id));
        if participants.len() == before {
            return Err(DomainError::UserNotFound(user_id));
        }
        Ok(())
    }
}

pub struct FakeBoardRepository {
    boards: Mutex<Vec<Board>>,
    participants: Arc<FakeParticipantRepository>,
    categories: Arc<FakeCategoryRepository>,
    goals: Arc<FakeGoalRepository>,
}

impl FakeBoardRepository {
    pub fn new(
        participants: Arc<FakeParticipantRepository>,
        categories: Arc<FakeCategoryRepository>,
        goals: Arc<FakeGoalRepository>,
    ) -> Self {
        Self {
            boards: Mutex::new(Vec::new()),
            participants,
            categories,
            goals,
        }
    }
}

#[async_trait]
impl BoardRepository for FakeBoardRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Board>> {
        Ok(self
            .boards
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id && !b.is_deleted)
            .cloned())
    }

    async fn find_by_participant(&self, user_id: Snowflake) -> RepoResult<Vec<Board>> {
        let memberships: Vec<Snowflake> = self
            .participants
            .participants
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.board_id)
            .collect();
        Ok(self
            .boards
            .lock()
            .unwrap()
            .iter()
            .filter(|b| !b.is_deleted && memberships.contains(&b.id))
            .cloned()
            .collect())
    }

    async fn create(&self, board: &Board) -> RepoResult<()> {
        self.boards.lock().unwrap().push(board.clone());
        Ok(())
    }

    async fn update(&self, board: &Board) -> RepoResult<()> {
        let mut boards = self.boards.lock().unwrap();
        let entry = boards
            .iter_mut()
            .find(|b| b.id == board.id && !b.is_deleted)
            .ok_or(DomainError::BoardNotFound(board.id))?;
        *entry = board.clone();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        {
            let mut boards = self.boards.lock().unwrap();
            let board = boards
                .iter_mut()
                .find(|b| b.id == id && !b.is_deleted)
                .ok_or(DomainError::BoardNotFound(id))?;
            board.mark_deleted();
        }

        let category_ids: Vec<Snowflake> = {
            let mut categories = self.categories.categories.lock().unwrap();
            categories
                .iter_mut()
                .filter(|c| c.board_id == id)
                .map(|c| {
                    c.is_deleted = true;
                    c.id
                })
                .collect()
        };

        let mut goals = self.goals.goals.lock().unwrap();
        for goal in goals.iter_mut() {
            if category_ids.contains(&goal.category_id) {
                goal.archive();
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeCategoryRepository {
    pub categories: Mutex<Vec<GoalCategory>>,
}

#[async_trait]
impl CategoryRepository for FakeCategoryRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalCategory>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_owned(
        &self,
        user_id: Snowflake,
        query: &CategoryQuery,
    ) -> RepoResult<Vec<GoalCategory>> {
        let mut results: Vec<GoalCategory> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id && !c.is_deleted)
            .filter(|c| match &query.search {
                Some(needle) => c.title.to_lowercase().contains(&needle.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();
        results.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(results
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(0))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn create(&self, category: &GoalCategory) -> RepoResult<()> {
        self.categories.lock().unwrap().push(category.clone());
        Ok(())
    }

    async fn update(&self, category: &GoalCategory) -> RepoResult<()> {
        let mut categories = self.categories.lock().unwrap();
        let entry = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(DomainError::CategoryNotFound(category.id))?;
        *entry = category.clone();
        Ok(())
    }
}

pub struct FakeGoalRepository {
    pub goals: Mutex<Vec<Goal>>,
    categories: Arc<FakeCategoryRepository>,
}

impl FakeGoalRepository {
    pub fn new(categories: Arc<FakeCategoryRepository>) -> Self {
        Self {
            goals: Mutex::new(Vec::new()),
            categories,
        }
    }
}

#[async_trait]
impl GoalRepository for FakeGoalRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Goal>> {
        Ok(self.goals.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn find_active(&self, user_id: Snowflake, query: &GoalQuery) -> RepoResult<Vec<Goal>> {
        let live_categories: Vec<Snowflake> = self
            .categories
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.is_deleted)
            .map(|c| c.id)
            .collect();

        let mut results: Vec<Goal> = self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id && !g.is_archived())
            .filter(|g| live_categories.contains(&g.category_id))
            .filter(|g| match &query.search {
                Some(needle) => {
                    let needle = needle.to_lowercase();
                    g.title.to_lowercase().contains(&needle)
                        || g.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&needle))
                }
                None => true,
            })
            .filter(|g| match query.due_date_from {
                Some(from) => g.due_date.is_some_and(|d| d >= from),
                None => true,
            })
            .filter(|g| match query.due_date_to {
                Some(to) => g.due_date.is_some_and(|d| d <= to),
                None => true,
            })
            .cloned()
            .collect();

        match query.ordering {
            GoalOrdering::TitleAsc => results.sort_by(|a, b| a.title.cmp(&b.title)),
            GoalOrdering::CreatedAsc => results.sort_by_key(|g| g.created_at),
            GoalOrdering::CreatedDesc => {
                results.sort_by_key(|g| std::cmp::Reverse(g.created_at));
            }
        }

        Ok(results
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(0))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        self.goals.lock().unwrap().push(goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> RepoResult<()> {
        let mut goals = self.goals.lock().unwrap();
        let entry = goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or(DomainError::GoalNotFound(goal.id))?;
        *entry = goal.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeCommentRepository {
    comments: Mutex<Vec<GoalComment>>,
}

#[async_trait]
impl CommentRepository for FakeCommentRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalComment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: Snowflake,
        goal_id: Option<Snowflake>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<GoalComment>> {
        let mut results: Vec<GoalComment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| goal_id.is_none_or(|g| c.goal_id == g))
            .cloned()
            .collect();
        results.sort_by_key(|c| std::cmp::Reverse(c.created_at));
        Ok(results
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn create(&self, comment: &GoalComment) -> RepoResult<()> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &GoalComment) -> RepoResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let entry = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        *entry = comment.clone();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::CommentNotFound(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeTgAccountRepository {
    pub accounts: Mutex<Vec<TgAccount>>,
}

#[async_trait]
impl TgAccountRepository for FakeTgAccountRepository {
    async fn find_by_tg_user_id(&self, tg_user_id: i64) -> RepoResult<Option<TgAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.tg_user_id == tg_user_id)
            .cloned())
    }

    async fn find_by_verification_code(&self, code: &str) -> RepoResult<Option<TgAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.verification_code.as_deref() == Some(code) && !a.is_linked())
            .cloned())
    }

    async fn create(&self, account: &TgAccount) -> RepoResult<()> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &TgAccount) -> RepoResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let entry = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(DomainError::TgAccountNotFound)?;
        *entry = account.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRefreshTokenRepository {
    tokens: Mutex<Vec<(String, RefreshTokenRecord)>>,
}

#[async_trait]
impl RefreshTokenRepository for FakeRefreshTokenRepository {
    async fn store(&self, token: &str, record: &RefreshTokenRecord) -> RepoResult<()> {
        let mut tokens = self.tokens.lock().unwrap();
        tokens.retain(|(t, _)| t != token);
        tokens.push((token.to_string(), record.clone()));
        Ok(())
    }

    async fn find(&self, token: &str) -> RepoResult<Option<RefreshTokenRecord>> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|(t, r)| t == token && r.expires_at > Utc::now())
            .map(|(_, r)| r.clone()))
    }

    async fn revoke(&self, token: &str) -> RepoResult<()> {
        self.tokens.lock().unwrap().retain(|(t, _)| t != token);
        Ok(())
    }
}

/// Records outbound messages instead of talking to Telegram
#[derive(Default)]
pub struct RecordingGateway {
    pub sent: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl BotGateway for RecordingGateway {
    async fn send_message(&self, chat_id: i64, text: &str) -> GatewayResult<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

/// A full in-memory backend plus the context wired over it
pub struct TestBackend {
    pub users: Arc<FakeUserRepository>,
    pub boards: Arc<FakeBoardRepository>,
    pub participants: Arc<FakeParticipantRepository>,
    pub categories: Arc<FakeCategoryRepository>,
    pub goals: Arc<FakeGoalRepository>,
    pub comments: Arc<FakeCommentRepository>,
    pub tg_accounts: Arc<FakeTgAccountRepository>,
    pub refresh_tokens: Arc<FakeRefreshTokenRepository>,
    pub gateway: Arc<RecordingGateway>,
    pub ctx: ServiceContext,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::with_policy(AccessPolicy::default())
    }

    pub fn with_policy(policy: AccessPolicy) -> Self {
        let users = Arc::new(FakeUserRepository::default());
        let participants = Arc::new(FakeParticipantRepository::default());
        let categories = Arc::new(FakeCategoryRepository::default());
        let goals = Arc::new(FakeGoalRepository::new(categories.clone()));
        let boards = Arc::new(FakeBoardRepository::new(
            participants.clone(),
            categories.clone(),
            goals.clone(),
        ));
        let comments = Arc::new(FakeCommentRepository::default());
        let tg_accounts = Arc::new(FakeTgAccountRepository::default());
        let refresh_tokens = Arc::new(FakeRefreshTokenRepository::default());
        let gateway = Arc::new(RecordingGateway::default());

        // Never connected; the fakes answer everything
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .expect("lazy pool");

        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .user_repo(users.clone())
            .board_repo(boards.clone())
            .participant_repo(participants.clone())
            .category_repo(categories.clone())
            .goal_repo(goals.clone())
            .comment_repo(comments.clone())
            .tg_account_repo(tg_accounts.clone())
            .refresh_token_repo(refresh_tokens.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret-for-services", 900, 604_800)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .bot_gateway(gateway.clone())
            .access_policy(policy)
            .build()
            .expect("test context");

        Self {
            users,
            boards,
            participants,
            categories,
            goals,
            comments,
            tg_accounts,
            refresh_tokens,
            gateway,
            ctx,
        }
    }

    /// Seed a user with a throwaway password hash
    pub async fn seed_user(&self, id: i64, username: &str) -> User {
        let user = User::new(Snowflake::new(id), username.to_string());
        self.users.create(&user, "unused-hash").await.unwrap();
        user
    }

    /// Seed a board owned by `owner`
    pub async fn seed_board(&self, id: i64, title: &str, owner: Snowflake) -> Board {
        let board = Board::new(Snowflake::new(id), title.to_string());
        self.boards.create(&board).await.unwrap();
        self.participants
            .create(&BoardParticipant::owner(board.id, owner))
            .await
            .unwrap();
        board
    }

    /// Seed a category on a board
    pub async fn seed_category(
        &self,
        id: i64,
        board_id: Snowflake,
        owner: Snowflake,
        title: &str,
    ) -> GoalCategory {
        let category = GoalCategory::new(Snowflake::new(id), board_id, owner, title.to_string());
        self.categories.create(&category).await.unwrap();
        category
    }
}

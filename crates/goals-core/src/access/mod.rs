//! Access control rule table
//!
//! A single pure predicate family consumed by both the service layer and
//! (through it) the HTTP surface. `authorize` operates on resource
//! snapshots, so the rules are testable without a database or transport.

use crate::value_objects::{BoardRole, Snowflake};

/// Actions a user may attempt against a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ManageParticipants,
    UpdateBoard,
    DeleteBoard,
    CreateCategory,
    DeleteCategory,
    CreateGoal,
    ReadGoal,
    UpdateGoal,
    ArchiveGoal,
    CreateComment,
    UpdateComment,
    DeleteComment,
}

/// Snapshot of the resource an action targets
///
/// Carries only the fields the rule table needs, captured at decision time.
/// `role` fields are the acting user's role on the relevant board, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Board {
        role: Option<BoardRole>,
    },
    Category {
        owner_id: Snowflake,
        board_role: Option<BoardRole>,
        is_deleted: bool,
    },
    Goal {
        owner_id: Snowflake,
    },
    Comment {
        owner_id: Snowflake,
        goal_owner_id: Snowflake,
    },
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Authorization predicate failed
    Deny(&'static str),
    /// The target category is soft-deleted; reported separately so the
    /// surface can answer with a field error instead of a 403
    DenyCategoryDeleted,
}

impl Decision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Configurable policy knobs for the rule table
///
/// Whether a board editor may delete categories is not pinned down by the
/// role semantics, so it is policy rather than a hard rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    pub editor_may_delete_categories: bool,
}

/// Decide whether `actor` may perform `action` on `resource`
pub fn authorize(
    actor: Snowflake,
    resource: &Resource,
    action: Action,
    policy: &AccessPolicy,
) -> Decision {
    match (resource, action) {
        (
            Resource::Board { role },
            Action::ManageParticipants | Action::UpdateBoard | Action::DeleteBoard,
        ) => {
            match role {
                Some(BoardRole::Owner) => Decision::Allow,
                _ => Decision::Deny("board owner required"),
            }
        }
        (Resource::Board { role }, Action::CreateCategory) => match role {
            Some(r) if r.can_write() => Decision::Allow,
            _ => Decision::Deny("board owner or editor required"),
        },
        (
            Resource::Category {
                owner_id,
                board_role,
                ..
            },
            Action::DeleteCategory,
        ) => {
            if *owner_id == actor {
                return Decision::Allow;
            }
            match board_role {
                Some(BoardRole::Owner) => Decision::Allow,
                Some(BoardRole::Editor) if policy.editor_may_delete_categories => Decision::Allow,
                _ => Decision::Deny("category owner or board owner required"),
            }
        }
        (
            Resource::Category {
                board_role,
                is_deleted,
                ..
            },
            Action::CreateGoal,
        ) => {
            // The deleted check comes first: creating in a dead category is
            // a business-rule failure even for users who could otherwise
            // write to the board.
            if *is_deleted {
                return Decision::DenyCategoryDeleted;
            }
            match board_role {
                Some(r) if r.can_write() => Decision::Allow,
                _ => Decision::Deny("write access to the category's board required"),
            }
        }
        (Resource::Goal { owner_id }, Action::ReadGoal | Action::UpdateGoal | Action::ArchiveGoal) => {
            if *owner_id == actor {
                Decision::Allow
            } else {
                Decision::Deny("goal owner required")
            }
        }
        (Resource::Comment { goal_owner_id, .. }, Action::CreateComment) => {
            if *goal_owner_id == actor {
                Decision::Allow
            } else {
                Decision::Deny("goal owner required")
            }
        }
        (Resource::Comment { owner_id, .. }, Action::UpdateComment | Action::DeleteComment) => {
            if *owner_id == actor {
                Decision::Allow
            } else {
                Decision::Deny("comment author required")
            }
        }
        _ => Decision::Deny("action not applicable to resource"),
    }
}

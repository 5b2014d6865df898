//! Closed enums shared across the domain: board roles, goal status, priority.
//!
//! All three serialize as small integers on the wire and in the database,
//! matching the numbering the web clients already rely on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role of a participant on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardRole {
    Owner,
    Editor,
    Reader,
}

impl BoardRole {
    /// Integer representation stored in the database
    #[inline]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Owner => 1,
            Self::Editor => 2,
            Self::Reader => 3,
        }
    }

    /// Parse from the stored integer representation
    pub const fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Owner),
            2 => Some(Self::Editor),
            3 => Some(Self::Reader),
            _ => None,
        }
    }

    /// Whether this role may create or edit categories and goals
    #[inline]
    pub const fn can_write(self) -> bool {
        matches!(self, Self::Owner | Self::Editor)
    }
}

/// Goal lifecycle status
///
/// `Archived` doubles as the deletion state: goals are never removed, only
/// transitioned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoalStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
    Archived,
}

impl GoalStatus {
    #[inline]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::ToDo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
            Self::Archived => 4,
        }
    }

    pub const fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::ToDo),
            2 => Some(Self::InProgress),
            3 => Some(Self::Done),
            4 => Some(Self::Archived),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_archived(self) -> bool {
        matches!(self, Self::Archived)
    }
}

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl GoalPriority {
    #[inline]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    pub const fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Critical),
            _ => None,
        }
    }
}

macro_rules! int_enum_serde {
    ($ty:ty, $name:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_i16(self.as_i16())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = i16::deserialize(deserializer)?;
                <$ty>::from_i16(value).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid {} value: {value}", $name))
                })
            }
        }
    };
}

int_enum_serde!(BoardRole, "role");
int_enum_serde!(GoalStatus, "status");
int_enum_serde!(GoalPriority, "priority");

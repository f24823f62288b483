//! Memo data model.
//!
//! A memo belongs to exactly one user, fixed at creation. Every mutation is
//! gated on the owner being the authenticated caller; see
//! [`crate::domain::memo_service`].

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Validation errors returned by the memo payload constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    ContentTooLong { max: usize },
}

impl fmt::Display for MemoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
            Self::ContentTooLong { max } => {
                write!(f, "content must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for MemoValidationError {}

/// Maximum allowed length for a memo title.
pub const TITLE_MAX: usize = 100;
/// Maximum allowed length for memo content.
pub const CONTENT_MAX: usize = 1000;

/// Storage-assigned memo identifier; never reused or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct MemoId(i32);

impl MemoId {
    /// Wrap a storage-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value for persistence adapters.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MemoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted memo record.
///
/// ## Invariants
/// - `user_id` is set once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    #[schema(example = 1)]
    pub id: MemoId,
    #[schema(example = 1)]
    pub user_id: UserId,
    #[schema(example = "Shopping list")]
    pub title: String,
    #[schema(example = "Eggs, milk")]
    pub content: String,
}

/// Payload for creating a memo; both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoDraft {
    title: String,
    content: String,
}

impl MemoDraft {
    /// Validate and construct a creation payload.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, MemoValidationError> {
        let title = validate_title(title.into())?;
        let content = validate_content(content.into())?;
        Ok(Self { title, content })
    }

    /// Memo title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Memo body.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// Partial update payload: any field left unset keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoPatch {
    title: Option<String>,
    content: Option<String>,
}

impl MemoPatch {
    /// Validate and construct a partial-update payload.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, MemoValidationError> {
        Ok(Self {
            title: title.map(validate_title).transpose()?,
            content: content.map(validate_content).transpose()?,
        })
    }

    /// Replacement title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replacement content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// True when no field is set; applying such a patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the patch to a memo, leaving unset fields unchanged.
    pub fn apply_to(&self, memo: &mut Memo) {
        if let Some(title) = &self.title {
            memo.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            memo.content.clone_from(content);
        }
    }
}

fn validate_title(title: String) -> Result<String, MemoValidationError> {
    if title.trim().is_empty() {
        return Err(MemoValidationError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX {
        return Err(MemoValidationError::TitleTooLong { max: TITLE_MAX });
    }
    Ok(title)
}

fn validate_content(content: String) -> Result<String, MemoValidationError> {
    if content.chars().count() > CONTENT_MAX {
        return Err(MemoValidationError::ContentTooLong { max: CONTENT_MAX });
    }
    Ok(content)
}

/// A not-yet-persisted memo; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemo {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

impl NewMemo {
    /// Bind a creation payload to its owner.
    pub fn from_draft(user_id: UserId, draft: MemoDraft) -> Self {
        Self {
            user_id,
            title: draft.title,
            content: draft.content,
        }
    }
}

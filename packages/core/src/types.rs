// ABOUTME: Domain type definitions shared across Tally packages
// ABOUTME: Profiles, profile patches, linked accounts, roles, and reporting identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portal role assigned to a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The authenticated user's mutable profile.
///
/// Exactly one authoritative copy exists server-side. Client-held copies are
/// advisory caches and must never be treated as ground truth while a
/// mutation is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    /// When set, the user's name is hidden on public pages (leaderboard)
    /// and rendered as "Anonymous User" instead.
    #[serde(default)]
    pub public_anonymous: bool,
    #[serde(default)]
    pub role: Role,
    pub subscribed_till: Option<DateTime<Utc>>,
    /// User-owned fields the client treats opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            image: None,
            public_anonymous: false,
            role: Role::User,
            subscribed_till: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Name as shown on public surfaces, honoring the anonymous flag.
    pub fn public_name(&self) -> &str {
        if self.public_anonymous {
            "Anonymous User"
        } else {
            self.name.as_deref().unwrap_or("Anonymous User")
        }
    }
}

/// Partial update to a [`Profile`]; only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_anonymous: Option<bool>,
    /// Opaque fields patched through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProfilePatch {
    /// Patch toggling only the anonymous-display flag.
    pub fn anonymous(value: bool) -> Self {
        Self {
            public_anonymous: Some(value),
            ..Default::default()
        }
    }

    /// Patch renaming the user.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Apply the present fields of this patch onto `profile`.
    pub fn merge_into(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = Some(name.clone());
        }
        if let Some(flag) = self.public_anonymous {
            profile.public_anonymous = flag;
        }
        for (key, value) in &self.extra {
            profile.extra.insert(key.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.public_anonymous.is_none() && self.extra.is_empty()
    }
}

/// External identity linked to a user (owned by the auth collaborator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub id: String,
    pub provider: String,
    pub provider_account_id: String,
    pub created_at: DateTime<Utc>,
}

/// Identity forwarded to the error-reporting collaborator while a session
/// is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

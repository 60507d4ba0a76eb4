//! Display identity of the browsing session.

use serde::{Deserialize, Serialize};

/// The signed-in profile shown in the navbar.
///
/// Set once when the session starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub avatar: String,
    pub profile: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&q=80".to_string(),
            profile: "default".to_string(),
        }
    }
}

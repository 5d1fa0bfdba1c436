use serde::{Deserialize, Serialize};

/// Identity of the caller, resolved by the API layer and threaded through
/// every service call. The core never assumes a particular user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        UserContext {
            user_id: user_id.into(),
        }
    }
}

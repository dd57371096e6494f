use serde::{Deserialize, Serialize};

/// The user who opened an issue.
///
/// Built from the `... on User` branch of the actor union. Bots, mannequins
/// and deleted accounts carry no user fields, so they surface with an empty
/// login and no company.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub company: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryOwner {
    pub login: String,
}

impl Repository {
    /// `owner/name`, as used in `repo:` search qualifiers.
    pub fn name_with_owner(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

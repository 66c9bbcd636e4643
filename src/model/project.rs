use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    /// Order document kind members of this project may see.
    pub vid_doc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailDto {
    pub id: i32,
    pub name: String,
    pub vid_doc: String,
    pub users: Vec<UserDto>,
}

/// Body for both creating and updating a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectInputDto {
    pub name: String,
    #[serde(default)]
    pub vid_doc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectUserDto {
    pub user_id: i32,
}

use crate::domain::session::{CurrentUser, Role};
use serde::Serialize;

#[derive(Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

impl From<CurrentUser> for User {
    fn from(user: CurrentUser) -> Self {
        Self { id: user.id, name: user.name, role: user.role }
    }
}

#[derive(Serialize)]
pub struct Logout {
    pub success: bool,
}

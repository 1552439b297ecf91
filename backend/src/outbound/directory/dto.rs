//! DTOs for decoding the remote user list.
//!
//! Only the four stored fields are read. Any other members of each record
//! (address, phone, company and so on) are ignored.

use serde::Deserialize;

use crate::domain::User;

#[derive(Debug, Deserialize)]
pub(super) struct RemoteUserDto {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) username: String,
    pub(super) email: String,
}

impl RemoteUserDto {
    pub(super) fn into_domain_user(self) -> Result<User, String> {
        let id = self.id;
        User::try_new(self.id, self.name, self.username, self.email)
            .map_err(|err| format!("remote user {id} is invalid: {err}"))
    }
}

pub(super) fn into_domain_users(records: Vec<RemoteUserDto>) -> Result<Vec<User>, String> {
    records
        .into_iter()
        .map(RemoteUserDto::into_domain_user)
        .collect()
}

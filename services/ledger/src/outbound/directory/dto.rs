//! DTOs for decoding directory lookup responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! shared [`User`] model in one pass. Decoding is deliberately lenient
//! about the envelope: a missing `success` flag or an absent `data` field
//! reads as "no user", matching directory variants that signal absence
//! through a 200 with an empty payload.

use serde::Deserialize;
use service_core::User;

#[derive(Debug, Deserialize)]
pub(super) struct LookupResponseDto {
    #[serde(default)]
    pub(super) success: Option<bool>,
    #[serde(default)]
    pub(super) data: Option<LookupUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LookupUserDto {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) email: String,
}

impl LookupResponseDto {
    pub(super) fn into_domain_user(self) -> Result<Option<User>, String> {
        if self.success == Some(false) {
            return Ok(None);
        }
        let Some(user) = self.data else {
            return Ok(None);
        };
        user.into_domain_user().map(Some)
    }
}

impl LookupUserDto {
    fn into_domain_user(self) -> Result<User, String> {
        let Self { id, name, email } = self;
        User::try_from_strings(id.clone(), name, email)
            .map_err(|err| format!("user {id:?} failed validation: {err}"))
    }
}

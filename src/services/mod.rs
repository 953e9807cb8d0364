//! Service layer errors and the page-load services built on top of the
//! collaborator traits.

use thiserror::Error;

use crate::auth::AuthError;
use crate::i18n::I18nError;
use crate::search::SearchError;

pub mod review;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("localization unavailable: {0}")]
    Formatter(#[from] I18nError),

    #[error("search backend failed: {0}")]
    Search(#[from] SearchError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

//! Отклик кандидата и авторизация правок на уровне полей

pub mod aggregate;
pub mod review;

pub use aggregate::{Application, ApplicationId, ReviewComment};
pub use review::{
    authorize_edit, completeness_score, sort_for_review, ReviewField, ReviewPatch,
};

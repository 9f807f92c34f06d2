//! Шаблон анкеты вакансии: схема полей, черновик поля, сбор значений

pub mod draft;
pub mod schema;
pub mod submission;

pub use draft::{DraftError, FieldDraft};
pub use schema::{
    slugify, ColumnSpan, FieldControl, FieldDescriptor, FieldKind, FieldOption, JobForm,
    JobFormDto, JobFormId,
};
pub use submission::{collect_submission, CollectedField, SubmissionError, SubmittedValue, Violation};

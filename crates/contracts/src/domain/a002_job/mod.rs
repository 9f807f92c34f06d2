pub mod aggregate;

pub use aggregate::{referenced_form_ids, Job, JobId, NewJobRequest};

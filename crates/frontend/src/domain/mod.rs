pub mod a001_job_form;
pub mod a002_job;
pub mod a003_category;
pub mod a004_status;
pub mod a005_application;

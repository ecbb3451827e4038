pub mod application;
pub mod business;
pub mod employee;
pub mod job_posting;

pub mod submission;

pub use submission::{ContactForm, Submission, SubmissionStatus};

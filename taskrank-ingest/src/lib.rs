//! taskrank-ingest: load task and feedback records from JSON/CSV and validate
//! them before they reach the scoring engine.

pub mod parsers;
pub mod types;
pub mod validate;

pub use parsers::{load_feedback, load_tasks, parse_feedback_json, parse_tasks_csv, parse_tasks_json};
pub use types::{InputFormat, RawTask};
pub use validate::validate_tasks;

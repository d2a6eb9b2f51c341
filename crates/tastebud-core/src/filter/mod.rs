//! Filter predicate engine and candidate queue builder.

mod model;
pub mod predicate;
mod queue;

pub use model::{FilterState, MAX_QUERY_CHARS, PriceBounds};
pub use queue::CandidateQueue;

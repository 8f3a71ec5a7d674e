//! foreman-core: construction assistant core (config, knowledge tables, and
//! the query responder).

mod knowledge;
mod responder;
mod shared;

pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use responder::{Responder, SUGGESTION_THRESHOLD};
pub use shared::CoreConfig;

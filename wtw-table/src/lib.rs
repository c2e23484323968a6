//! wtw-table: the embedded answer snapshot and the local resolver.

pub mod resolver;
pub mod table;

pub use resolver::TableResolver;
pub use table::{Answer, AnswerTable};

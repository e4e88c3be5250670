pub mod evaluation;
pub mod interview;

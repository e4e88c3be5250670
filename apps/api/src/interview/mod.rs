// Interview assembly and answer evaluation.
// Track inference picks a question set, scoring is keyword coverage only.

pub mod assembly;
pub mod bank;
pub mod evaluation;
pub mod handlers;
pub mod scoring;
pub mod track;

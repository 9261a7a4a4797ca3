//! Presentation timeline: data model, play/wait builder and frame evaluator.

pub(crate) mod dsl;
pub(crate) mod eval;
pub(crate) mod model;

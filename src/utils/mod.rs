//! Helper functions which are not specific to any one part of the engine.

pub mod matching;
pub mod text;

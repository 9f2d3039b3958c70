//! Reply sources for the health chat

mod keyword;

pub use keyword::KeywordResponder;

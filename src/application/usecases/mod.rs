//! 유스케이스 모음.

pub mod upsert_comment;

//! Domain layer
//! 코멘트/리액션 규칙(엔티티/값 객체/도메인 정책)을 외부 의존성 없이 표현한다.

pub mod comment;
pub mod error;
pub mod reaction;
pub mod target;

//! 리액션 어휘, 정규화 규칙, 적용 결과.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::CommentError;

/// GitHub가 허용하는 코멘트 리액션(닫힌 어휘).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reaction {
    PlusOne,
    MinusOne,
    Laugh,
    Confused,
    Heart,
    Hooray,
    Rocket,
    Eyes,
}

impl Reaction {
    pub const ALL: [Reaction; 8] = [
        Reaction::PlusOne,
        Reaction::MinusOne,
        Reaction::Laugh,
        Reaction::Confused,
        Reaction::Heart,
        Reaction::Hooray,
        Reaction::Rocket,
        Reaction::Eyes,
    ];

    /// API `content` 필드 값.
    pub fn as_str(self) -> &'static str {
        match self {
            Reaction::PlusOne => "+1",
            Reaction::MinusOne => "-1",
            Reaction::Laugh => "laugh",
            Reaction::Confused => "confused",
            Reaction::Heart => "heart",
            Reaction::Hooray => "hooray",
            Reaction::Rocket => "rocket",
            Reaction::Eyes => "eyes",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reaction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 대소문자 구분.
        Reaction::ALL
            .into_iter()
            .find(|reaction| reaction.as_str() == s)
            .ok_or(())
    }
}

/// 중복 없는 유효 리액션 집합.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionSet(BTreeSet<Reaction>);

/// 정규화 결과. 버려진 토큰은 진단 메시지용으로 보관한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedReactions {
    pub set: ReactionSet,
    pub invalid: Vec<String>,
}

impl ReactionSet {
    /// 원시 입력(쉼표 구분, 공백 허용)을 정규화한다.
    /// 알 수 없는 토큰은 버리고 `invalid`에 남기며, 빈 토큰은 조용히 무시한다.
    pub fn normalize(raw: &str) -> NormalizedReactions {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        let mut set = BTreeSet::new();
        let mut invalid = Vec::new();
        for token in compact.split(',').filter(|t| !t.is_empty()) {
            match token.parse::<Reaction>() {
                Ok(reaction) => {
                    set.insert(reaction);
                }
                Err(()) => invalid.push(token.to_string()),
            }
        }

        NormalizedReactions {
            set: ReactionSet(set),
            invalid,
        }
    }

    /// 정규화 후 유효 리액션이 하나도 없으면 실패로 본다.
    pub fn parse_non_empty(raw: &str) -> Result<NormalizedReactions, CommentError> {
        let normalized = Self::normalize(raw);
        if normalized.set.is_empty() {
            return Err(CommentError::NoValidReactions {
                raw: raw.to_string(),
            });
        }
        Ok(normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, reaction: Reaction) -> bool {
        self.0.contains(&reaction)
    }

    pub fn iter(&self) -> impl Iterator<Item = Reaction> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ReactionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().map(Reaction::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

/// 리액션 하나에 대한 원격 적용 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionStatus {
    Applied,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionOutcome {
    pub reaction: Reaction,
    pub status: ReactionStatus,
}

impl ReactionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self.status, ReactionStatus::Applied)
    }
}

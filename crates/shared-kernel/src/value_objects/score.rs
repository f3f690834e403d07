// crates/shared-kernel/src/value_objects/score.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// 可読性スコア (0..=100)。値が大きいほど読みやすい。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct ReadabilityScore(u8);

impl ReadabilityScore {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Values above [`Self::MAX`] are clamped.
    #[inline]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX.0 { Self::MAX } else { Self(value) }
    }

    /// Rounds half away from zero, then clamps into `0..=100`. NaN maps to zero.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        let clamped = raw.round().clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0));
        // clamp済みなので u8 に収まる
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = clamped as u8;
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

// デシリアライズも new を経由させ、範囲外の値を取り込まない
impl From<u8> for ReadabilityScore {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<ReadabilityScore> for u8 {
    fn from(score: ReadabilityScore) -> Self {
        score.0
    }
}

impl PartialEq<u8> for ReadabilityScore {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ReadabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

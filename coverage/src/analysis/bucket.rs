//! Multiplier buckets and per-type tallies

/// Where a single team member lands against one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Immune,
    Resist4x,
    Resist2x,
    Neutral,
    Weak2x,
    Weak4x,
}

impl Bucket {
    /// Bucket a combined multiplier. Exact matches for 0 through 2,
    /// anything at or above 4 counts as a 4x weakness.
    pub fn from_multiplier(multiplier: f32) -> Option<Self> {
        if multiplier == 0.0 {
            Some(Bucket::Immune)
        } else if multiplier == 0.25 {
            Some(Bucket::Resist4x)
        } else if multiplier == 0.5 {
            Some(Bucket::Resist2x)
        } else if multiplier == 1.0 {
            Some(Bucket::Neutral)
        } else if multiplier == 2.0 {
            Some(Bucket::Weak2x)
        } else if multiplier >= 4.0 {
            Some(Bucket::Weak4x)
        } else {
            None
        }
    }
}

/// Team member counts per bucket for one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketCounts {
    pub immune: u32,
    pub resist_4x: u32,
    pub resist_2x: u32,
    pub neutral: u32,
    pub weak_2x: u32,
    pub weak_4x: u32,
}

impl BucketCounts {
    pub fn record(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Immune => self.immune += 1,
            Bucket::Resist4x => self.resist_4x += 1,
            Bucket::Resist2x => self.resist_2x += 1,
            Bucket::Neutral => self.neutral += 1,
            Bucket::Weak2x => self.weak_2x += 1,
            Bucket::Weak4x => self.weak_4x += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.immune + self.resist_4x + self.resist_2x + self.neutral + self.weak_2x + self.weak_4x
    }

    /// Credit for immunities and resistances
    pub fn defense_score(&self) -> i32 {
        (self.immune * 4 + self.resist_4x * 3 + self.resist_2x * 2) as i32
    }

    /// Penalty for weaknesses
    pub fn vulnerability_score(&self) -> i32 {
        (self.weak_2x * 2 + self.weak_4x * 4) as i32
    }

    pub fn net_score(&self) -> i32 {
        self.defense_score() - self.vulnerability_score()
    }

    /// Summary risk; negative is safe, positive is exposed
    pub fn risk(&self) -> i32 {
        self.weak_2x as i32 + 2 * self.weak_4x as i32
            - self.resist_2x as i32
            - 2 * self.resist_4x as i32
            - 3 * self.immune as i32
    }
}

/// Coarse banding of [`BucketCounts::risk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    Excellent,
    Good,
    Neutral,
    Poor,
    Critical,
}

impl RiskLevel {
    pub fn from_risk(risk: i32) -> Self {
        match risk {
            i32::MIN..=-3 => RiskLevel::Excellent,
            -2..=-1 => RiskLevel::Good,
            0..=1 => RiskLevel::Neutral,
            2..=3 => RiskLevel::Poor,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Excellent => "excellent",
            RiskLevel::Good => "good",
            RiskLevel::Neutral => "neutral",
            RiskLevel::Poor => "poor",
            RiskLevel::Critical => "critical",
        }
    }
}

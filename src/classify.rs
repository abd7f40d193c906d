use crate::types::scoring::Score;
use serde::Serialize;

pub const NO_GO_THRESHOLD: Score = 1.0;
pub const CAUTION_THRESHOLD: Score = 0.66;
pub const CATEGORY_A_THRESHOLD: Score = 25.0;
pub const CATEGORY_B_THRESHOLD: Score = 15.0;

/// Gating verdict for the pre-screening track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Go,
    Caution,
    NoGo,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Go => "Go",
            Decision::Caution => "Caution - Detailed ESDD Required",
            Decision::NoGo => "No-Go",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Decision::Go => "Proceed with investment process",
            Decision::Caution => {
                "Proceed with detailed ESG due diligence to identify and mitigate risks"
            }
            Decision::NoGo => "Decline the investment opportunity due to high ESG risks",
        }
    }
}

/// Risk category for the categorization track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::A => "A - High Risk",
            Category::B => "B - Medium Risk",
            Category::C => "C - Low Risk",
        }
    }
}

/// Tier lower bounds are inclusive: a total of exactly 1.0 is No-Go.
pub fn pre_screening(total: Score) -> Decision {
    if total >= NO_GO_THRESHOLD {
        Decision::NoGo
    } else if total >= CAUTION_THRESHOLD {
        Decision::Caution
    } else {
        Decision::Go
    }
}

pub fn categorization(total: Score) -> Category {
    if total >= CATEGORY_A_THRESHOLD {
        Category::A
    } else if total >= CATEGORY_B_THRESHOLD {
        Category::B
    } else {
        Category::C
    }
}

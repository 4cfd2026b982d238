//! Category tags and the category filter selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the "no filter" selector
pub const ALL_LABEL: &str = "全部";

/// Slug of the "no filter" selector
pub const ALL_SLUG: &str = "all";

/// Fixed set of quote categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 勵志
    Inspiration,
    /// 人生
    Life,
    /// 夢想
    Dream,
    /// 成功
    Success,
    /// 學習
    Learning,
    /// 時間
    Time,
    /// 自信
    Confidence,
    /// 機會
    Opportunity,
    /// 效率
    Efficiency,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 9] = [
        Self::Inspiration,
        Self::Life,
        Self::Dream,
        Self::Success,
        Self::Learning,
        Self::Time,
        Self::Confidence,
        Self::Opportunity,
        Self::Efficiency,
    ];

    /// Display label shown on the category tag
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inspiration => "勵志",
            Self::Life => "人生",
            Self::Dream => "夢想",
            Self::Success => "成功",
            Self::Learning => "學習",
            Self::Time => "時間",
            Self::Confidence => "自信",
            Self::Opportunity => "機會",
            Self::Efficiency => "效率",
        }
    }

    /// ASCII name accepted on the command line
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Inspiration => "inspiration",
            Self::Life => "life",
            Self::Dream => "dream",
            Self::Success => "success",
            Self::Learning => "learning",
            Self::Time => "time",
            Self::Confidence => "confidence",
            Self::Opportunity => "opportunity",
            Self::Efficiency => "efficiency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label() == value || category.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Category selector: either no filter or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No filter
    #[default]
    All,
    /// Only quotes in the given category
    Only(Category),
}

impl CategoryFilter {
    /// Selector entries in display order: `All` first, then every category
    #[must_use]
    pub fn selectors() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    /// Check whether a category passes this filter
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value == ALL_LABEL || value.eq_ignore_ascii_case(ALL_SLUG) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

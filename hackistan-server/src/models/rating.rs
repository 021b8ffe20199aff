//! Review ratings and derived averages
//!
//! A submission's overall rating is the mean of its four category means,
//! not the mean of every individual number. Averages are kept at full
//! precision and only rounded (one decimal, half-up) when serialized.

use serde::{Deserialize, Serialize, Serializer};

/// Lowest rating a reviewer may give in any category
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a reviewer may give in any category
pub const MAX_RATING: f64 = 5.0;

/// The four rating categories, in display order
pub const CATEGORIES: [&str; 4] = ["innovation", "implementation", "impact", "presentation"];

/// One reviewer's four category ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub innovation: f64,
    pub implementation: f64,
    pub impact: f64,
    pub presentation: f64,
}

impl Ratings {
    fn as_array(&self) -> [f64; 4] {
        [
            self.innovation,
            self.implementation,
            self.impact,
            self.presentation,
        ]
    }
}

/// Per-category means as returned by an aggregate query.
///
/// `None` for a category means the store had nothing to average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryMeans {
    pub innovation: Option<f64>,
    pub implementation: Option<f64>,
    pub impact: Option<f64>,
    pub presentation: Option<f64>,
}

impl CategoryMeans {
    /// Average a set of reviews category by category.
    pub fn from_ratings<'a, I>(ratings: I) -> (i64, Self)
    where
        I: IntoIterator<Item = &'a Ratings>,
    {
        let mut count = 0i64;
        let mut sums = [0.0f64; 4];

        for r in ratings {
            count += 1;
            for (sum, value) in sums.iter_mut().zip(r.as_array()) {
                *sum += value;
            }
        }

        if count == 0 {
            return (0, Self::default());
        }

        let n = count as f64;
        let means = Self {
            innovation: Some(sums[0] / n),
            implementation: Some(sums[1] / n),
            impact: Some(sums[2] / n),
            presentation: Some(sums[3] / n),
        };
        (count, means)
    }
}

/// Derived rating summary for a submission with at least one review
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvgRating {
    #[serde(serialize_with = "one_decimal")]
    pub overall: f64,
    #[serde(serialize_with = "one_decimal")]
    pub innovation: f64,
    #[serde(serialize_with = "one_decimal")]
    pub implementation: f64,
    #[serde(serialize_with = "one_decimal")]
    pub impact: f64,
    #[serde(serialize_with = "one_decimal")]
    pub presentation: f64,
}

impl AvgRating {
    /// Build the summary from per-category means.
    ///
    /// Returns `None` when there are no reviews, or when any category mean
    /// is missing; a submission never gets a zero-valued summary.
    pub fn from_means(review_count: i64, means: CategoryMeans) -> Option<Self> {
        if review_count <= 0 {
            return None;
        }

        let innovation = means.innovation?;
        let implementation = means.implementation?;
        let impact = means.impact?;
        let presentation = means.presentation?;

        Some(Self {
            overall: (innovation + implementation + impact + presentation) / 4.0,
            innovation,
            implementation,
            impact,
            presentation,
        })
    }

    /// Summarize a set of reviews directly.
    pub fn from_ratings<'a, I>(ratings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Ratings>,
    {
        let (count, means) = CategoryMeans::from_ratings(ratings);
        Self::from_means(count, means)
    }
}

/// Round to one decimal place, half-up.
///
/// Ratings are never negative, so "half-up" and "half away from zero"
/// agree. The epsilon absorbs binary representation error such as
/// `4.35 * 10.0 == 43.49999…`.
pub fn round_one_decimal(value: f64) -> f64 {
    ((value * 10.0) + 0.5 + 1e-9).floor() / 10.0
}

fn one_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_one_decimal(*value))
}

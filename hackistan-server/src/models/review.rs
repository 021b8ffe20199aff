//! Review submission input and validation

use serde::Deserialize;

use super::rating::{Ratings, CATEGORIES, MAX_RATING, MIN_RATING};
use super::ValidationError;

/// Maximum length for review comments
const MAX_COMMENT_LEN: usize = 4000;

/// Ratings as they arrive over the wire; any category may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingsInput {
    pub innovation: Option<f64>,
    pub implementation: Option<f64>,
    pub impact: Option<f64>,
    pub presentation: Option<f64>,
}

/// Body of `POST /submissions/{id}/reviews`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    #[serde(alias = "userId")]
    pub hacker_id: Option<i32>,
    pub ratings: Option<RatingsInput>,
    pub comment: Option<String>,
}

/// Validated review, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub submission_id: i32,
    pub hacker_id: i32,
    pub ratings: Ratings,
    pub comment: String,
}

impl NewReview {
    /// Validate a review submission.
    ///
    /// # Rules
    /// - All four rating categories present (missing ones are named)
    /// - Each rating within 0..=5 with at most one decimal place
    /// - Comment non-empty after trimming, max 4000 characters
    /// - Reviewer id present
    pub fn new(submission_id: i32, input: ReviewSubmission) -> Result<Self, ValidationError> {
        let ratings = input.ratings.unwrap_or_default();

        let values = [
            ratings.innovation,
            ratings.implementation,
            ratings.impact,
            ratings.presentation,
        ];
        let categories: Vec<(&'static str, Option<f64>)> =
            CATEGORIES.into_iter().zip(values).collect();

        let missing: Vec<&'static str> = categories
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingRatings { fields: missing });
        }

        for &(field, value) in &categories {
            check_rating(field, value.unwrap_or_default())?;
        }

        let comment = input
            .comment
            .ok_or(ValidationError::Missing { field: "comment" })?;
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ValidationError::Empty { field: "comment" });
        }
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(ValidationError::InvalidFormat {
                field: "comment",
                reason: "exceeds maximum length of 4000 characters",
            });
        }

        let hacker_id = input
            .hacker_id
            .ok_or(ValidationError::Missing { field: "hackerId" })?;

        Ok(Self {
            submission_id,
            hacker_id,
            ratings: Ratings {
                innovation: ratings.innovation.unwrap_or_default(),
                implementation: ratings.implementation.unwrap_or_default(),
                impact: ratings.impact.unwrap_or_default(),
                presentation: ratings.presentation.unwrap_or_default(),
            },
            comment: comment.to_owned(),
        })
    }
}

/// Ratings are stored as NUMERIC(3,1); anything finer would not echo back.
fn check_rating(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }

    let tenths = value * 10.0;
    if (tenths - tenths.round()).abs() > 1e-6 {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "at most one decimal place",
        });
    }

    Ok(())
}

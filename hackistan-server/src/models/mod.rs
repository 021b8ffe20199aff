//! Domain models
//!
//! Input types validate at construction and return `ValidationError`,
//! never panic. Read models are the JSON shapes handed to the frontend.

pub mod rating;
pub mod read;
pub mod review;
pub mod status;
pub mod tier;
pub mod validation;

pub use rating::{AvgRating, CategoryMeans, Ratings};
pub use read::{Hackathon, Review, Sponsor, Submission, Track};
pub use review::{NewReview, RatingsInput, ReviewSubmission};
pub use status::HackathonStatus;
pub use tier::SponsorTier;
pub use validation::ValidationError;

//! Repository implementations for database access
//!
//! Each repository borrows the pool and returns plain row records; the
//! composer turns rows into read models.

pub mod hackathons;
pub mod reviews;
pub mod sponsors;
pub mod submissions;
pub mod tracks;

pub use hackathons::{HackathonRepo, HackathonRow};
pub use reviews::{ReviewRepo, ReviewRow};
pub use sponsors::{SponsorRepo, SponsorRow};
pub use submissions::{SubmissionRepo, SubmissionRow};
pub use tracks::{TrackRepo, TrackRow};

//! Demo data for local development
//!
//! Seeds one active hackathon with two tracks, two hackers, two
//! submissions, one review each, and two sponsors. Skipped entirely when
//! any hackathon already exists.

use sqlx::{PgPool, Postgres, Transaction};

use super::DbError;

const PRIZES: &str = "1st Place: $3,000\n2nd Place: $1,500\n3rd Place: $500";

/// Seed the database unless it already holds data.
///
/// Returns `true` when rows were inserted.
pub async fn run(pool: &PgPool) -> Result<bool, DbError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hackathons")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!(hackathons = existing, "Database already has data, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let hackathon_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO hackathons (
            title, description, status, start_date, end_date,
            submission_deadline, prizes_total
        ) VALUES (
            'HackaSummer 2025',
            'Our annual summer hackathon bringing together the brightest minds in tech.',
            'active',
            '2025-06-01 00:00:00+00',
            '2025-06-30 23:59:59+00',
            '2025-06-25 23:59:59+00',
            10000
        )
        RETURNING id
        "#,
    )
    .fetch_one(&mut *tx)
    .await?;

    let web_track = insert_track(&mut tx, hackathon_id, "Web Development").await?;
    let ai_track = insert_track(&mut tx, hackathon_id, "AI/ML").await?;

    let jane = insert_hacker(
        &mut tx,
        "Jane Developer",
        "jane@example.com",
        "https://randomuser.me/api/portraits/women/44.jpg",
        &["JavaScript", "React", "Node.js"],
    )
    .await?;
    let john = insert_hacker(
        &mut tx,
        "John Coder",
        "john@example.com",
        "https://randomuser.me/api/portraits/men/32.jpg",
        &["Python", "TensorFlow", "React"],
    )
    .await?;

    for hacker_id in [jane, john] {
        sqlx::query(
            "INSERT INTO hackathon_registrations (hackathon_id, hacker_id) VALUES ($1, $2)",
        )
        .bind(hackathon_id)
        .bind(hacker_id)
        .execute(&mut *tx)
        .await?;
    }

    let eco_tracker = insert_project(
        &mut tx,
        ProjectSeed {
            hackathon_id,
            hacker_id: jane,
            track_id: web_track,
            name: "EcoTracker",
            description: "A web app to track your carbon footprint and suggest improvements",
            long_description: "EcoTracker is a comprehensive web application designed to help individuals and households track their carbon footprint across various aspects of daily life. The app provides personalized suggestions for reducing environmental impact based on user behavior patterns and local sustainability options.",
            team_name: "Green Coders",
            team_members: &["Jane Developer", "Sarah Designer"],
            tech_tags: &["React", "Node.js", "MongoDB", "Chart.js"],
            submitted_at: "2025-06-20 14:30:00+00",
        },
    )
    .await?;

    let health_assistant = insert_project(
        &mut tx,
        ProjectSeed {
            hackathon_id,
            hacker_id: john,
            track_id: ai_track,
            name: "AI Health Assistant",
            description: "An AI-powered health assistant that provides personalized wellness recommendations",
            long_description: "Our AI Health Assistant uses machine learning to analyze user health data and provide personalized wellness recommendations. The system learns from user feedback and adapts its suggestions over time to create a truly personalized health coaching experience.",
            team_name: "HealthTech Innovators",
            team_members: &["John Coder", "Emma ML Engineer"],
            tech_tags: &["Python", "TensorFlow", "React Native", "Flask"],
            submitted_at: "2025-06-22 09:45:00+00",
        },
    )
    .await?;

    insert_review(
        &mut tx,
        eco_tracker,
        john,
        "Really impressive project with great attention to detail. The UI is polished and the carbon calculation engine is robust.",
        [4.5, 4.0, 4.5, 4.0],
    )
    .await?;
    insert_review(
        &mut tx,
        health_assistant,
        jane,
        "The ML model shows great promise, but could use more training data. Overall implementation is solid and the concept is innovative.",
        [4.0, 3.5, 4.5, 4.0],
    )
    .await?;

    let tech_forward = insert_ally(
        &mut tx,
        "TechForward Inc.",
        "Empowering developers to build the future through open source and education.",
        "https://placehold.co/200x100?text=TechForward",
        "platinum",
        "A leading technology company focused on developer tools and cloud infrastructure.",
        "https://example.com/techforward",
    )
    .await?;
    let green_tech = insert_ally(
        &mut tx,
        "GreenTech Solutions",
        "Creating a sustainable future through technology and innovation.",
        "https://placehold.co/200x100?text=GreenTech",
        "gold",
        "GreenTech provides sustainable technology solutions for businesses and consumers.",
        "https://example.com/greentech",
    )
    .await?;

    for ally_id in [tech_forward, green_tech] {
        sqlx::query("INSERT INTO ally_hackathons (ally_id, hackathon_id) VALUES ($1, $2)")
            .bind(ally_id)
            .bind(hackathon_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(hackathon_id, "Database seeded");
    Ok(true)
}

async fn insert_track(
    tx: &mut Transaction<'_, Postgres>,
    hackathon_id: i32,
    name: &str,
) -> Result<i32, DbError> {
    let id = sqlx::query_scalar(
        "INSERT INTO hackathon_tracks (hackathon_id, track_name, prizes) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(hackathon_id)
    .bind(name)
    .bind(PRIZES)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_hacker(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    email: &str,
    avatar_url: &str,
    skills: &[&str],
) -> Result<i32, DbError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO hackers (name, email, avatar_url, skills, status)
        VALUES ($1, $2, $3, $4, 'Member')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(avatar_url)
    .bind(to_owned_vec(skills))
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

struct ProjectSeed<'a> {
    hackathon_id: i32,
    hacker_id: i32,
    track_id: i32,
    name: &'a str,
    description: &'a str,
    long_description: &'a str,
    team_name: &'a str,
    team_members: &'a [&'a str],
    tech_tags: &'a [&'a str],
    submitted_at: &'a str,
}

async fn insert_project(
    tx: &mut Transaction<'_, Postgres>,
    project: ProjectSeed<'_>,
) -> Result<i32, DbError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO projects (
            hackathon_id, hacker_id, track_id, project_name,
            description, long_description, team_name, team_members,
            tech_tags, submission_date
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10::timestamptz)
        RETURNING id
        "#,
    )
    .bind(project.hackathon_id)
    .bind(project.hacker_id)
    .bind(project.track_id)
    .bind(project.name)
    .bind(project.description)
    .bind(project.long_description)
    .bind(project.team_name)
    .bind(to_owned_vec(project.team_members))
    .bind(to_owned_vec(project.tech_tags))
    .bind(project.submitted_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_review(
    tx: &mut Transaction<'_, Postgres>,
    project_id: i32,
    hacker_id: i32,
    comment: &str,
    [innovation, implementation, impact, presentation]: [f64; 4],
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO reviews (
            project_id, hacker_id, comment,
            innovation_rating, implementation_rating, impact_rating, presentation_rating
        ) VALUES ($1, $2, $3, $4::numeric, $5::numeric, $6::numeric, $7::numeric)
        "#,
    )
    .bind(project_id)
    .bind(hacker_id)
    .bind(comment)
    .bind(innovation)
    .bind(implementation)
    .bind(impact)
    .bind(presentation)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_ally(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    mission_statement: &str,
    logo_url: &str,
    tier: &str,
    description: &str,
    website_url: &str,
) -> Result<i32, DbError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO allies (name, mission_statement, logo_url, tier, description, website_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(mission_statement)
    .bind(logo_url)
    .bind(tier)
    .bind(description)
    .bind(website_url)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

//! Schema creation, run on startup
//!
//! Every statement is idempotent (`IF NOT EXISTS`), so running against an
//! existing database is a no-op.

use sqlx::PgPool;

use super::DbError;

/// Tables in foreign-key order
const TABLES: &[(&str, &str)] = &[
    (
        "hackathons",
        r#"
        CREATE TABLE IF NOT EXISTS hackathons (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL CHECK (status IN ('upcoming', 'active', 'past')),
            start_date TIMESTAMPTZ,
            end_date TIMESTAMPTZ,
            submission_deadline TIMESTAMPTZ,
            prizes_total NUMERIC(10, 2),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "hackers",
        r#"
        CREATE TABLE IF NOT EXISTS hackers (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            avatar_url TEXT,
            manifesto TEXT,
            skills TEXT[] NOT NULL DEFAULT '{}',
            interests TEXT[] NOT NULL DEFAULT '{}',
            status TEXT NOT NULL DEFAULT 'Visitor' CHECK (status IN ('Visitor', 'Member')),
            membership_expires DATE
        )
        "#,
    ),
    (
        "hackathon_tracks",
        r#"
        CREATE TABLE IF NOT EXISTS hackathon_tracks (
            id SERIAL PRIMARY KEY,
            hackathon_id INT NOT NULL REFERENCES hackathons(id) ON DELETE CASCADE,
            track_name TEXT NOT NULL,
            description TEXT,
            prizes TEXT,
            requirements TEXT[] NOT NULL DEFAULT '{}'
        )
        "#,
    ),
    (
        "hackathon_registrations",
        r#"
        CREATE TABLE IF NOT EXISTS hackathon_registrations (
            id SERIAL PRIMARY KEY,
            hackathon_id INT NOT NULL REFERENCES hackathons(id) ON DELETE CASCADE,
            hacker_id INT NOT NULL REFERENCES hackers(id) ON DELETE CASCADE,
            registered_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (hackathon_id, hacker_id)
        )
        "#,
    ),
    (
        "projects",
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id SERIAL PRIMARY KEY,
            hackathon_id INT NOT NULL REFERENCES hackathons(id) ON DELETE CASCADE,
            hacker_id INT REFERENCES hackers(id) ON DELETE CASCADE,
            track_id INT REFERENCES hackathon_tracks(id) ON DELETE SET NULL,
            project_name TEXT NOT NULL,
            description TEXT,
            long_description TEXT,
            submission_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            submission_url TEXT,
            demo_url TEXT,
            thumbnail_url TEXT,
            screenshot_urls TEXT[] NOT NULL DEFAULT '{}',
            tech_tags TEXT[] NOT NULL DEFAULT '{}',
            team_name TEXT,
            team_members TEXT[] NOT NULL DEFAULT '{}'
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id SERIAL PRIMARY KEY,
            project_id INT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            hacker_id INT REFERENCES hackers(id) ON DELETE SET NULL,
            comment TEXT NOT NULL,
            innovation_rating NUMERIC(3, 1) NOT NULL CHECK (innovation_rating BETWEEN 0 AND 5),
            implementation_rating NUMERIC(3, 1) NOT NULL CHECK (implementation_rating BETWEEN 0 AND 5),
            impact_rating NUMERIC(3, 1) NOT NULL CHECK (impact_rating BETWEEN 0 AND 5),
            presentation_rating NUMERIC(3, 1) NOT NULL CHECK (presentation_rating BETWEEN 0 AND 5),
            submission_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "allies",
        r#"
        CREATE TABLE IF NOT EXISTS allies (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            mission_statement TEXT,
            featured_image_url TEXT,
            logo_url TEXT,
            tier TEXT CHECK (tier IN ('platinum', 'gold', 'silver', 'bronze')),
            description TEXT,
            website_url TEXT
        )
        "#,
    ),
    (
        "ally_hackathons",
        r#"
        CREATE TABLE IF NOT EXISTS ally_hackathons (
            ally_id INT NOT NULL REFERENCES allies(id) ON DELETE CASCADE,
            hackathon_id INT NOT NULL REFERENCES hackathons(id) ON DELETE CASCADE,
            PRIMARY KEY (ally_id, hackathon_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    // At most one active hackathon
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_hackathons_single_active ON hackathons ((status)) WHERE status = 'active'",
    "CREATE INDEX IF NOT EXISTS idx_tracks_hackathon ON hackathon_tracks(hackathon_id)",
    "CREATE INDEX IF NOT EXISTS idx_registrations_hackathon ON hackathon_registrations(hackathon_id)",
    "CREATE INDEX IF NOT EXISTS idx_projects_hackathon ON projects(hackathon_id, submission_date DESC)",
    "CREATE INDEX IF NOT EXISTS idx_projects_track ON projects(track_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_project ON reviews(project_id, submission_date DESC)",
    "CREATE INDEX IF NOT EXISTS idx_ally_hackathons_hackathon ON ally_hackathons(hackathon_id)",
];

/// Create all tables and indexes.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "creating table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_follow_foreign_key_order() {
        let position = |name: &str| TABLES.iter().position(|(n, _)| *n == name).unwrap();

        assert!(position("hackathons") < position("hackathon_tracks"));
        assert!(position("hackathon_tracks") < position("projects"));
        assert!(position("hackers") < position("projects"));
        assert!(position("projects") < position("reviews"));
        assert!(position("allies") < position("ally_hackathons"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = super::super::create_pool(&url).await.expect("pool");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }
}

//! Application state for Lexiscan API

use analysis_engine::AnalysisEngine;
use anyhow::Result;
use brief_search::{corpus, BriefIndex};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;

use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::log::{InteractionLog, SqliteInteractionLog};

pub struct AppState {
    pub db: SqlitePool,
    pub engine: AnalysisEngine,
    pub extractor: Box<dyn TextExtractor>,
    pub interactions: Box<dyn InteractionLog>,
    /// None when the index could not be opened; brief search then
    /// degrades to empty results
    pub briefs: Option<BriefIndex>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:lexiscan.db?mode=rwc".to_string());

        let briefs = match build_brief_index() {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!("Brief index unavailable, search disabled: {}", e);
                None
            }
        };

        Self::with_options(&database_url, briefs, Box::new(PlainTextExtractor), None).await
    }

    /// Test-friendly constructor with explicit collaborators
    pub async fn with_options(
        database_url: &str,
        briefs: Option<BriefIndex>,
        extractor: Box<dyn TextExtractor>,
        interactions: Option<Box<dyn InteractionLog>>,
    ) -> Result<Self> {
        tracing::info!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Self::run_migrations(&pool).await?;

        let interactions =
            interactions.unwrap_or_else(|| Box::new(SqliteInteractionLog::new(pool.clone())));

        Ok(Self {
            db: pool,
            engine: AnalysisEngine::new(),
            extractor,
            interactions,
            briefs,
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS scans (
                id TEXT PRIMARY KEY,
                filename TEXT NOT NULL,
                document_hash TEXT NOT NULL,
                document_type TEXT NOT NULL,
                jurisdiction TEXT NOT NULL,
                result_json TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_scans_document_type ON scans(document_type)
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS legal_rules (
                jurisdiction TEXT NOT NULL,
                document_type TEXT NOT NULL,
                title TEXT NOT NULL,
                summary TEXT NOT NULL,
                statute_refs TEXT NOT NULL,
                PRIMARY KEY (jurisdiction, document_type)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS interactions (
                id TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                detail TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Self::seed_rules(pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    async fn seed_rules(pool: &SqlitePool) -> Result<()> {
        // (jurisdiction, document_type, title, summary, statute refs JSON)
        let rules = [
            (
                "ON",
                "purchase_agreement",
                "Agreements of Purchase and Sale",
                "Residential resale agreements customarily carry a deposit of about \
                 five percent, buyer and seller signatures, and a stated completion date.",
                r#"["Real Estate and Business Brokers Act, 2002","Land Registration Reform Act"]"#,
            ),
            (
                "ON",
                "lease",
                "Residential tenancy agreements",
                "Rent deposits are capped at one rental period and must be applied to \
                 the last period of the tenancy; standard lease form is mandatory.",
                r#"["Residential Tenancies Act, 2006 s. 105","O. Reg. 9/18"]"#,
            ),
            (
                "ON",
                "nda",
                "Confidentiality agreements",
                "Enforceability turns on a bounded definition of confidential \
                 information and a reasonable term.",
                r#"["Common law (breach of confidence)"]"#,
            ),
            (
                "ON",
                "employment",
                "Employment agreements",
                "Probationary periods beyond three months do not displace statutory \
                 notice; termination clauses must meet ESA minimums.",
                r#"["Employment Standards Act, 2000 ss. 54-61"]"#,
            ),
            (
                "ON",
                "will",
                "Wills and estates",
                "A will requires the testator's signature made or acknowledged before \
                 two witnesses present at the same time.",
                r#"["Succession Law Reform Act s. 4"]"#,
            ),
        ];

        for (jurisdiction, document_type, title, summary, statute_refs) in rules {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO legal_rules
                    (jurisdiction, document_type, title, summary, statute_refs)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(jurisdiction)
            .bind(document_type)
            .bind(title)
            .bind(summary)
            .bind(statute_refs)
            .execute(pool)
            .await?;
        }

        Ok(())
    }
}

/// Open the on-disk index when BRIEF_INDEX_DIR is set, otherwise serve
/// the built-in corpus from RAM.
fn build_brief_index() -> Result<BriefIndex> {
    match std::env::var("BRIEF_INDEX_DIR") {
        Ok(dir) => {
            let path = PathBuf::from(dir);
            let is_new = !path.exists();
            let index = BriefIndex::open_or_create(&path)?;
            if is_new {
                index.add_briefs(&corpus::builtin_briefs())?;
            }
            Ok(index)
        }
        Err(_) => BriefIndex::with_builtin_corpus(),
    }
}

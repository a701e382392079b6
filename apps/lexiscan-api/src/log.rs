//! Interaction logging
//!
//! Display metrics for scans and questions go through an injected
//! repository rather than ambient globals, so tests can swap in a no-op
//! and a real deployment can point it elsewhere. Nothing here feeds back
//! into classification.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Scan,
    Question,
}

impl InteractionKind {
    fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Scan => "scan",
            InteractionKind::Question => "question",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub detail: String,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct InteractionStats {
    pub scans: i64,
    pub questions: i64,
}

#[async_trait]
pub trait InteractionLog: Send + Sync {
    async fn record(&self, event: InteractionEvent) -> Result<()>;
    async fn stats(&self) -> Result<InteractionStats>;
}

/// SQLite-backed log, sharing the API's connection pool
pub struct SqliteInteractionLog {
    pool: SqlitePool,
}

impl SqliteInteractionLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionLog for SqliteInteractionLog {
    async fn record(&self, event: InteractionEvent) -> Result<()> {
        sqlx::query("INSERT INTO interactions (id, kind, detail, created_at) VALUES (?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(event.kind.as_str())
            .bind(&event.detail)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn stats(&self) -> Result<InteractionStats> {
        let scans: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM interactions WHERE kind = 'scan'")
                .fetch_one(&self.pool)
                .await?;
        let questions: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM interactions WHERE kind = 'question'")
                .fetch_one(&self.pool)
                .await?;

        Ok(InteractionStats {
            scans: scans.0,
            questions: questions.0,
        })
    }
}

/// Discards everything; used in tests
pub struct NoopInteractionLog;

#[async_trait]
impl InteractionLog for NoopInteractionLog {
    async fn record(&self, _event: InteractionEvent) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<InteractionStats> {
        Ok(InteractionStats::default())
    }
}

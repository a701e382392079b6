//! Data models for Lexiscan API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::AnalysisResult;
use sqlx::FromRow;

/// Request to scan a document. Uploads arrive either as base64 bytes or
/// as already-extracted text; one of the two is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content_base64: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Extra caller-supplied context appended to the analyzed text
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub id: String,
    pub filename: String,
    pub document_hash: String,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QaRequest {
    pub question: String,
    pub scan_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    pub answer_markdown: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RulesQuery {
    pub jurisdiction: String,
    pub document_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    pub jurisdiction: String,
    pub document_type: String,
    pub title: String,
    pub summary: String,
    pub statute_refs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BriefsQuery {
    pub q: String,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BriefsResponse {
    pub query: String,
    pub results: Vec<brief_search::BriefHit>,
}

/// Scan row stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbScan {
    pub id: String,
    pub filename: String,
    pub document_hash: String,
    pub result_json: String,
    pub created_at: DateTime<Utc>,
}

/// Rule row from the seeded legal_rules table
#[derive(Debug, Clone, FromRow)]
pub struct DbRule {
    pub jurisdiction: String,
    pub document_type: String,
    pub title: String,
    pub summary: String,
    pub statute_refs: String,
}

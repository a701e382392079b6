//! HTTP handlers for Lexiscan API

use axum::{
    extract::{Path, Query, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::log::{InteractionEvent, InteractionKind, InteractionStats};
use crate::models::*;
use crate::state::AppState;
use shared_types::AnalysisResult;

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "lexiscan-api",
    }))
}

/// Scan an uploaded document: extract text, analyze, persist
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let bytes: Vec<u8> = if let Some(b64) = &req.content_base64 {
        BASE64
            .decode(b64)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid content base64: {}", e)))?
    } else if let Some(text) = &req.text {
        text.clone().into_bytes()
    } else {
        return Err(ApiError::InvalidRequest(
            "Either content_base64 or text is required".to_string(),
        ));
    };

    if bytes.is_empty() {
        return Err(ApiError::InvalidRequest("Empty upload".to_string()));
    }

    let mut text = state.extractor.extract(&req.filename, &bytes)?;
    if let Some(context) = &req.context {
        text.push('\n');
        text.push_str(context);
    }
    let document_hash = hex::encode(Sha256::digest(&bytes));
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let result = state.engine.analyze(&text, &req.filename);

    let result_json =
        serde_json::to_string(&result).map_err(|e| ApiError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO scans (id, filename, document_hash, document_type, jurisdiction, result_json, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.filename)
    .bind(&document_hash)
    .bind(result.document_type.slug())
    .bind(&result.jurisdiction)
    .bind(&result_json)
    .bind(now.to_rfc3339())
    .execute(&state.db)
    .await?;

    if let Err(e) = state
        .interactions
        .record(InteractionEvent {
            kind: InteractionKind::Scan,
            detail: result.document_type.slug().to_string(),
        })
        .await
    {
        tracing::warn!("Failed to record scan interaction: {}", e);
    }

    tracing::info!(
        "Scanned {} ({}): {} at {:.0}% confidence",
        id,
        req.filename,
        result.document_type.slug(),
        result.confidence * 100.0
    );

    Ok(Json(ScanResponse {
        id,
        filename: req.filename,
        document_hash,
        result,
        created_at: now,
    }))
}

/// Get a stored scan by ID
pub async fn get_scan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ScanResponse>, ApiError> {
    let scan = load_scan(&state, &id).await?;
    let result: AnalysisResult =
        serde_json::from_str(&scan.result_json).map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(ScanResponse {
        id: scan.id,
        filename: scan.filename,
        document_hash: scan.document_hash,
        result,
        created_at: scan.created_at,
    }))
}

/// Answer a canned question about a stored scan
pub async fn qa(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QaRequest>,
) -> Result<Json<QaResponse>, ApiError> {
    if req.question.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Question is required".to_string()));
    }

    let scan = load_scan(&state, &req.scan_id).await?;
    let result: AnalysisResult =
        serde_json::from_str(&scan.result_json).map_err(|e| ApiError::Internal(e.into()))?;

    let answer_markdown = state.engine.answer(&req.question, &result);

    if let Err(e) = state
        .interactions
        .record(InteractionEvent {
            kind: InteractionKind::Question,
            detail: req.question.clone(),
        })
        .await
    {
        tracing::warn!("Failed to record question interaction: {}", e);
    }

    Ok(Json(QaResponse { answer_markdown }))
}

/// Look up the seeded rule record for a jurisdiction and document type
pub async fn rules(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RulesQuery>,
) -> Result<Json<RuleResponse>, ApiError> {
    let rule: Option<DbRule> = sqlx::query_as(
        r#"
        SELECT jurisdiction, document_type, title, summary, statute_refs
        FROM legal_rules
        WHERE jurisdiction = ? AND document_type = ?
        "#,
    )
    .bind(&query.jurisdiction)
    .bind(&query.document_type)
    .fetch_optional(&state.db)
    .await?;

    let rule = rule.ok_or(ApiError::RuleNotFound {
        jurisdiction: query.jurisdiction,
        document_type: query.document_type,
    })?;

    let statute_refs: Vec<String> =
        serde_json::from_str(&rule.statute_refs).unwrap_or_default();

    Ok(Json(RuleResponse {
        jurisdiction: rule.jurisdiction,
        document_type: rule.document_type,
        title: rule.title,
        summary: rule.summary,
        statute_refs,
    }))
}

/// Search legal briefs. Degrades to empty results when the index is
/// unavailable or the query cannot be parsed.
pub async fn briefs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BriefsQuery>,
) -> Result<Json<BriefsResponse>, ApiError> {
    let limit = query.limit.unwrap_or(10).min(50);

    let results = match &state.briefs {
        Some(index) => match index.search(&query.q, query.jurisdiction.as_deref(), limit) {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!("Brief search failed for {:?}: {}", query.q, e);
                Vec::new()
            }
        },
        None => {
            tracing::warn!("Brief index unavailable; returning no results");
            Vec::new()
        }
    };

    Ok(Json(BriefsResponse {
        query: query.q,
        results,
    }))
}

/// Interaction counters for the dashboard
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InteractionStats>, ApiError> {
    let stats = state.interactions.stats().await?;
    Ok(Json(stats))
}

async fn load_scan(state: &AppState, id: &str) -> Result<DbScan, ApiError> {
    let scan: Option<DbScan> = sqlx::query_as(
        r#"
        SELECT id, filename, document_hash, result_json, created_at
        FROM scans
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    scan.ok_or_else(|| ApiError::ScanNotFound(id.to_string()))
}

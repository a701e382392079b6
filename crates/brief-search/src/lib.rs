//! Keyword search over legal practice briefs
//!
//! Maintains a Tantivy (BM25) index of short practice briefs and exposes
//! `search(query, jurisdiction, limit)`. The built-in corpus keeps the
//! service usable with no external data source configured.

pub mod corpus;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, Schema, Value, STORED, STRING, TEXT};
use tantivy::{Index, IndexWriter, ReloadPolicy, TantivyDocument};

/// One brief in the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    pub id: String,
    pub title: String,
    pub content: String,
    pub url: String,
    pub jurisdiction: String,
}

/// A search hit: title, excerpt, and source link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefHit {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub jurisdiction: String,
    pub score: f32,
}

pub struct BriefIndex {
    index: Index,
    id_field: Field,
    title_field: Field,
    content_field: Field,
    url_field: Field,
    jurisdiction_field: Field,
}

impl BriefIndex {
    /// Create or open an index at the given path
    pub fn open_or_create(index_path: &std::path::Path) -> Result<Self> {
        let schema = Self::schema();

        let index = if index_path.exists() {
            Index::open_in_dir(index_path)?
        } else {
            std::fs::create_dir_all(index_path)?;
            Index::create_in_dir(index_path, schema.clone())?
        };

        Ok(Self::from_index(index, &schema))
    }

    /// In-RAM index, used by tests and as the no-config default
    pub fn in_memory() -> Result<Self> {
        let schema = Self::schema();
        let index = Index::create_in_ram(schema.clone());
        Ok(Self::from_index(index, &schema))
    }

    /// In-RAM index pre-loaded with the built-in brief corpus
    pub fn with_builtin_corpus() -> Result<Self> {
        let index = Self::in_memory()?;
        index.add_briefs(&corpus::builtin_briefs())?;
        Ok(index)
    }

    fn schema() -> Schema {
        let mut builder = Schema::builder();
        builder.add_text_field("id", STRING | STORED);
        builder.add_text_field("title", TEXT | STORED);
        builder.add_text_field("content", TEXT | STORED);
        builder.add_text_field("url", STRING | STORED);
        builder.add_text_field("jurisdiction", STRING | STORED);
        builder.build()
    }

    fn from_index(index: Index, schema: &Schema) -> Self {
        Self {
            id_field: schema.get_field("id").expect("id field"),
            title_field: schema.get_field("title").expect("title field"),
            content_field: schema.get_field("content").expect("content field"),
            url_field: schema.get_field("url").expect("url field"),
            jurisdiction_field: schema.get_field("jurisdiction").expect("jurisdiction field"),
            index,
        }
    }

    /// Add briefs in one commit
    pub fn add_briefs(&self, briefs: &[Brief]) -> Result<()> {
        let mut writer: IndexWriter = self.index.writer(50_000_000)?;

        for brief in briefs {
            let mut doc = TantivyDocument::new();
            doc.add_text(self.id_field, &brief.id);
            doc.add_text(self.title_field, &brief.title);
            doc.add_text(self.content_field, &brief.content);
            doc.add_text(self.url_field, &brief.url);
            doc.add_text(self.jurisdiction_field, &brief.jurisdiction);
            writer.add_document(doc)?;
        }

        writer.commit()?;
        tracing::debug!(count = briefs.len(), "indexed briefs");
        Ok(())
    }

    /// BM25 search over title and content, optionally filtered by
    /// jurisdiction. Results are sorted by descending score.
    pub fn search(
        &self,
        query: &str,
        jurisdiction: Option<&str>,
        limit: usize,
    ) -> Result<Vec<BriefHit>> {
        let reader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;
        let searcher = reader.searcher();

        let query_parser =
            QueryParser::for_index(&self.index, vec![self.title_field, self.content_field]);
        let parsed = query_parser.parse_query(query)?;

        // Overfetch so the jurisdiction post-filter can still fill `limit`
        let fetch = if jurisdiction.is_some() { limit * 4 } else { limit };
        let top_docs = searcher.search(&parsed, &TopDocs::with_limit(fetch.max(1)))?;

        let mut hits = Vec::new();
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;

            let brief_jurisdiction = self.stored_text(&doc, self.jurisdiction_field);
            if let Some(wanted) = jurisdiction {
                if !brief_jurisdiction.eq_ignore_ascii_case(wanted) {
                    continue;
                }
            }

            let content = self.stored_text(&doc, self.content_field);
            hits.push(BriefHit {
                title: self.stored_text(&doc, self.title_field),
                excerpt: excerpt(&content, query),
                url: self.stored_text(&doc, self.url_field),
                jurisdiction: brief_jurisdiction,
                score,
            });

            if hits.len() == limit {
                break;
            }
        }

        Ok(hits)
    }

    fn stored_text(&self, doc: &TantivyDocument, field: Field) -> String {
        doc.get_first(field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    }
}

/// Excerpt around the first query term found in the content, else the head
fn excerpt(content: &str, query: &str) -> String {
    let content_lower = content.to_lowercase();

    for term in query.split_whitespace() {
        let term = term.to_lowercase();
        if term.len() < 3 {
            continue;
        }
        if let Some(pos) = content_lower.find(&term) {
            let start = floor_boundary(content, pos.saturating_sub(60));
            let end = floor_boundary(content, (pos + term.len() + 100).min(content.len()));
            return format!("...{}...", content[start..end].trim());
        }
    }

    content.chars().take(160).collect()
}

fn floor_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_seeded_briefs() {
        let index = BriefIndex::with_builtin_corpus().unwrap();
        let hits = index.search("deposit", None, 5).unwrap();

        assert!(!hits.is_empty());
        assert!(hits[0].excerpt.to_lowercase().contains("deposit"));
    }

    #[test]
    fn jurisdiction_filter_applies() {
        let index = BriefIndex::in_memory().unwrap();
        index
            .add_briefs(&[
                Brief {
                    id: "on-1".into(),
                    title: "Ontario deposits".into(),
                    content: "Rent deposit rules in Ontario".into(),
                    url: "https://example.org/on-1".into(),
                    jurisdiction: "ON".into(),
                },
                Brief {
                    id: "bc-1".into(),
                    title: "BC deposits".into(),
                    content: "Security deposit rules in British Columbia".into(),
                    url: "https://example.org/bc-1".into(),
                    jurisdiction: "BC".into(),
                },
            ])
            .unwrap();

        let hits = index.search("deposit", Some("ON"), 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].jurisdiction, "ON");
    }

    #[test]
    fn respects_limit() {
        let index = BriefIndex::with_builtin_corpus().unwrap();
        let hits = index.search("agreement", None, 2).unwrap();
        assert!(hits.len() <= 2);
    }

    #[test]
    fn persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("briefs");
        {
            let index = BriefIndex::open_or_create(&path).unwrap();
            index.add_briefs(&corpus::builtin_briefs()).unwrap();
        }

        let reopened = BriefIndex::open_or_create(&path).unwrap();
        let hits = reopened.search("deposit", None, 5).unwrap();
        assert!(!hits.is_empty());
    }
}

pub mod types;

pub use types::{
    AnalysisResult, CompletenessStatus, DocumentType, FieldMatch, Issue, Severity, ValidityStatus,
};

//! Doc-code alignment via keyword-concept sets.

use std::collections::BTreeSet;

use lore_core::models::{AlignmentAnalysis, DriftLevel};
use lore_semantics::keywords;

/// Compare the concepts of a document against the concepts of code.
///
/// ```text
/// missing = code − doc
/// extra   = doc − code
/// score   = (total − |missing| − |extra|) / total      (1.0 when total = 0)
/// ```
pub fn check_doc_code_alignment(
    doc_id: &str,
    doc: &str,
    code_id: &str,
    code: &str,
) -> AlignmentAnalysis {
    let doc_concepts = keywords::extract(doc);
    let code_concepts = keywords::extract(code);
    analyze(doc_id, &doc_concepts, code_id, &code_concepts)
}

/// Alignment over precomputed concept sets.
pub fn analyze(
    doc_id: &str,
    doc_concepts: &BTreeSet<String>,
    code_id: &str,
    code_concepts: &BTreeSet<String>,
) -> AlignmentAnalysis {
    let missing_in_doc: Vec<String> = code_concepts.difference(doc_concepts).cloned().collect();
    let extra_in_doc: Vec<String> = doc_concepts.difference(code_concepts).cloned().collect();
    let total_concepts = doc_concepts.union(code_concepts).count();
    let matched = total_concepts - missing_in_doc.len() - extra_in_doc.len();

    let alignment_score = if total_concepts == 0 {
        1.0
    } else {
        matched as f64 / total_concepts as f64
    };
    let drift_level = DriftLevel::from_score(alignment_score);

    tracing::debug!(
        doc_id,
        code_id,
        matched,
        total_concepts,
        alignment_score,
        "checked doc-code alignment"
    );

    AlignmentAnalysis {
        doc_id: doc_id.to_string(),
        code_id: code_id.to_string(),
        missing_in_doc,
        extra_in_doc,
        matched,
        total_concepts,
        alignment_score,
        drift_level,
    }
}

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::models::ContextSummary;

/// Characters of each document shown in `summaries`.
const PREVIEW_CHARS: usize = 80;

/// A stored document and its embedding
#[derive(Debug, Clone)]
struct ContextEntry {
    text: String,
    embedding: Vec<f32>,
    added_at: DateTime<Utc>,
}

/// Append-only in-memory document store with cosine-similarity lookup.
///
/// Text and embedding are stored together, so there is never a document
/// without a vector or the reverse.
#[derive(Default)]
pub struct ContextStore {
    entries: RwLock<Vec<ContextEntry>>,
}

/// The best-matching document for a query
#[derive(Debug, Clone)]
pub struct ContextMatch {
    pub index: usize,
    pub text: String,
    pub score: f32,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. Returns the total number of stored documents.
    pub fn add(&self, text: String, embedding: Vec<f32>) -> usize {
        let mut entries = self.entries.write();
        entries.push(ContextEntry {
            text,
            embedding,
            added_at: Utc::now(),
        });
        entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Return the single most similar document. On equal scores the earliest
    /// upload wins.
    pub fn best_match(&self, query_embedding: &[f32]) -> Option<ContextMatch> {
        let entries = self.entries.read();

        let mut best: Option<(usize, f32)> = None;
        for (i, entry) in entries.iter().enumerate() {
            let score = cosine_similarity(query_embedding, &entry.embedding);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((i, score)),
            }
        }

        best.map(|(index, score)| ContextMatch {
            index,
            text: entries[index].text.clone(),
            score,
        })
    }

    pub fn summaries(&self) -> Vec<ContextSummary> {
        self.entries
            .read()
            .iter()
            .enumerate()
            .map(|(index, e)| ContextSummary {
                index,
                chars: e.text.chars().count(),
                preview: e.text.chars().take(PREVIEW_CHARS).collect(),
                added_at: e.added_at,
            })
            .collect()
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

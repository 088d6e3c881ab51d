//! # rag-api
//!
//! A small retrieval-augmented question-answering service. Documents are
//! uploaded over HTTP, embedded, and kept in memory. A question is embedded
//! the same way, matched against every stored document by cosine
//! similarity, and the single best document is handed to a generative model
//! with instructions to answer from that text alone.
//!
//! ## Request flow
//!
//! ```text
//!   POST /upload_context          POST /ask
//!          │                          │
//!          ▼                          ▼
//!   ┌─────────────┐           ┌─────────────┐
//!   │  Embed doc  │           │ Embed query │
//!   └──────┬──────┘           └──────┬──────┘
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐  top-1    ┌─────────────┐
//!   │ContextStore │──────────▶│   Prompt    │
//!   │ (append)    │  cosine   │ (doc + q)   │
//!   └─────────────┘           └──────┬──────┘
//!                                    ▼
//!                             ┌─────────────┐
//!                             │  Generate   │
//!                             │ ≤150 tokens │
//!                             └──────┬──────┘
//!                                    ▼
//!                             ┌─────────────┐
//!                             │ Extract {…} │
//!                             └─────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and LLM provider
//! - [`models`] - Request/response wire types
//! - [`store`] - Append-only in-memory document store with cosine top-1 lookup
//! - [`llm::embeddings`] - Embedding generation via Ollama or OpenAI-compatible APIs
//! - [`llm::generate`] - Bounded, non-streaming answer generation
//! - [`llm::prompt`] - Extraction prompt and control-token sanitisation
//! - [`llm::extract`] - JSON object extraction from free-form model output
//! - [`api`] - Axum router and HTTP handlers
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod state;
pub mod store;

//! Serverless gift-exchange draws for the U-Engine ecosystem.
//!
//! An organizer enters participants, a seed phrase and optional pairwise
//! constraints; the crate draws who gives to whom and packs each result
//! into a link token, so every participant learns only their own
//! assignment. Nothing is stored: the seed makes every draw reproducible.
//!
//! # Modules
//!
//! - **`random`**: djb2 seed hashing, Mulberry32 stream, seeded Fisher–Yates
//! - **`models`**: `Constraint`, `Assignment`, link payloads, themes
//! - **`validation`**: constraint consistency checks (fail-fast)
//! - **`engine`**: bounded randomized greedy draw, draw audit
//! - **`codec`**: URL-safe base64 JSON tokens
//! - **`links`**: personal and reproducibility links, query routing
//! - **`text`**: organizer text formats for participants and constraints
//!
//! # Example
//!
//! ```
//! use u_santa::engine::generate_assignments;
//! use u_santa::links::{generate_links, state_url};
//! use u_santa::models::{Constraint, DisplayOptions, SantaState};
//!
//! let people = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];
//! let constraints = vec![Constraint::exclude("Alice", "Bob")];
//!
//! let draw = generate_assignments(&people, "frost-cocoa-7", &constraints).unwrap();
//! let links = generate_links(&draw, "https://example.org/", &DisplayOptions::default()).unwrap();
//! assert_eq!(links.len(), 3);
//!
//! let state = SantaState::new("frost-cocoa-7", people).with_constraints(constraints);
//! let organizer_link = state_url("https://example.org/", &state).unwrap();
//! assert!(organizer_link.contains("?state="));
//! ```
//!
//! # Guarantees
//!
//! Same participants, seed and constraints always give the same draw. The
//! generator is not cryptographically secure and tokens are not encrypted.

pub mod codec;
pub mod engine;
pub mod error;
pub mod links;
pub mod models;
pub mod random;
pub mod text;
pub mod validation;

pub use engine::{generate_assignments, AssignmentEngine};
pub use error::{DrawError, TokenError};

//! Score parsing and weighted grade computation.
//!
//! Raw form text flows through the parser into a [`ScoreList`], and the
//! engine applies the selected [`Scheme`] to produce a final grade plus an
//! advisory [`Tip`].
//!
//! # Example
//!
//! ```
//! use gradebook_tauri::grading::{compute, parse_scores, Scheme, Weight};
//!
//! let scores = parse_scores("80, 90");
//! let grade = compute(Scheme::Standard, &scores, Some(70.0), Weight::default()).unwrap();
//! assert_eq!(format!("{:.2}", grade), "76.00");
//! ```

mod engine;
mod parser;
mod tips;
mod types;

pub use engine::{average, compute, evaluate};
pub use parser::{parse_scores, parse_secondary};
pub use tips::select_tip;
pub use types::*;

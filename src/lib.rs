//! Greedy selection of pairwise-dissimilar testpoints for bank growth.
//!
//! A run reads precomputed match files into adjacency maps, repeatedly keeps
//! the point with the most neighbors above the minimal match while evicting
//! those neighbors, and appends the kept points plus every unclustered
//! proposal to the old bank.

pub mod adjacency;
pub mod assembler;
pub mod config;
pub mod degree;
pub mod elimination;
pub mod error;
pub mod io_utils;
pub mod match_parser;
pub mod ordered;
pub mod pipeline;
pub mod process;
pub mod selector;
pub mod summary;
pub mod table;
pub mod types;

pub use adjacency::AdjacencyMap;
pub use assembler::{assemble_bank, AssemblyCounts};
pub use config::SelectionConfig;
pub use degree::{Degree, DegreeTable};
pub use elimination::EliminationRegistry;
pub use error::BankError;
pub use match_parser::{expand_match_glob, parse_match_files, MatchEdge, MatchTables};
pub use pipeline::{run_selection, RunReport};
pub use selector::{select_survivors, GreedySelector, Selection, SelectorState, StepOutcome, TieBreak};
pub use table::RecordTable;
pub use types::{MatchValue, Tag};

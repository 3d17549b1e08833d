pub mod levenshtein;

pub use levenshtein::{levenshtein, similarity};

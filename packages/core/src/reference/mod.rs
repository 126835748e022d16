//! Static reference material shown next to scores.

pub mod acm;
pub mod owasp;

pub use acm::{AcmBand, Characteristic, CHARACTERISTICS};
pub use owasp::{by_rank, top10, AgenticRisk};

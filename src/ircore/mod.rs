pub mod token;
pub mod doc;
pub mod ranking;
pub mod utils;
pub mod finder;
pub mod error;

pub type TermId = u32;
/// Opaque key of a candidate (employee id, job order id, ...), carried through untouched.
pub type CandidateId = u64;

pub const CFG_NAME: &str = ".rfindcfg";

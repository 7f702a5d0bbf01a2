// Sub-scorers: four independent heuristics, each taking (résumé, job) signals
// and returning a score in [0, 100]. Missing input never fails — every scorer
// has a documented neutral fallback.

pub mod education;
pub mod experience;
pub mod similarity;
pub mod skills;

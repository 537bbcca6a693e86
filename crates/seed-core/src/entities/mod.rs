//! Record structs for every seeded table family.
//!
//! Records carry content only. Identifiers and sort orders are assigned when
//! the records are rendered, so the same dataset can be seeded repeatedly.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be read from (and dumped to) a TOML dataset file.

mod course;
mod glossary;
mod prompt;
mod stage;
mod style;

pub use course::{CourseModule, Lesson};
pub use glossary::GlossaryTerm;
pub use prompt::Prompt;
pub use stage::{DashboardStage, StageTask};
pub use style::StyleCard;

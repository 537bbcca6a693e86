//! Record → `INSERT` builders.
//!
//! Row builders take the identifier explicitly. [`Emitter`] owns identifier
//! assignment: one fresh id per record, and for parent/child families the
//! parent's id is generated once and reused as every child's foreign key.
//! Sort orders start at 1 and follow input order within the parent.

use seed_core::entities::{
    CourseModule, DashboardStage, GlossaryTerm, Lesson, Prompt, StageTask, StyleCard,
};
use seed_core::ids::IdGenerator;

use crate::error::SqlError;
use crate::literal::SqlLiteral;
use crate::statement::InsertStatement;
use crate::tables;

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn style_card(id: &str, card: &StyleCard) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::STYLE_CARDS,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(&card.name),
            SqlLiteral::text(&card.gradient),
            SqlLiteral::text(&card.image_url),
            SqlLiteral::text(&card.description),
            SqlLiteral::nullable(card.long_description.as_deref()),
            SqlLiteral::text(&card.prompt),
            SqlLiteral::text_array(&card.tags),
            SqlLiteral::text(&card.category),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn glossary_term(id: &str, term: &GlossaryTerm) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::GLOSSARY_TERMS,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(&term.term),
            SqlLiteral::nullable(term.slang.as_deref().filter(|s| !s.is_empty())),
            SqlLiteral::text(&term.definition),
            SqlLiteral::text(&term.category),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn dashboard_stage(
    id: &str,
    stage: &DashboardStage,
    sort_order: u32,
) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::DASHBOARD_STAGES,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(&stage.title),
            SqlLiteral::text(&stage.subtitle),
            SqlLiteral::from(sort_order),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if the title contains a NUL byte.
pub fn stage_task(
    id: &str,
    stage_id: &str,
    task: &StageTask,
    sort_order: u32,
) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::STAGE_TASKS,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(stage_id),
            SqlLiteral::text(&task.title),
            SqlLiteral::from(sort_order),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn prompt(id: &str, prompt: &Prompt) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::PROMPTS,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(&prompt.title),
            SqlLiteral::text(&prompt.description),
            SqlLiteral::text(&prompt.category),
            SqlLiteral::text(&prompt.usage),
            SqlLiteral::text(&prompt.content),
            SqlLiteral::text_array(&prompt.tags),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn course_module(
    id: &str,
    module: &CourseModule,
    sort_order: u32,
) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::COURSE_MODULES,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(&module.title),
            SqlLiteral::text(&module.subtitle),
            SqlLiteral::from(sort_order),
        ],
    )
}

/// # Errors
///
/// Returns [`SqlError::MalformedLiteral`] if a text field contains a NUL byte.
pub fn lesson(
    id: &str,
    module_id: &str,
    lesson: &Lesson,
    sort_order: u32,
) -> Result<InsertStatement, SqlError> {
    InsertStatement::new(
        tables::LESSONS,
        vec![
            SqlLiteral::text(id),
            SqlLiteral::text(module_id),
            SqlLiteral::text(&lesson.title),
            SqlLiteral::text(&lesson.description),
            SqlLiteral::from(lesson.duration_minutes),
            SqlLiteral::nullable(lesson.video_url.as_deref()),
            SqlLiteral::from(sort_order),
        ],
    )
}

/// Assigns identifiers and builds statements for whole record families.
pub struct Emitter<'a> {
    ids: &'a dyn IdGenerator,
}

impl<'a> Emitter<'a> {
    #[must_use]
    pub fn new(ids: &'a dyn IdGenerator) -> Self {
        Self { ids }
    }

    /// # Errors
    ///
    /// Propagates the first [`SqlError`] from a row builder.
    pub fn styles(&self, cards: &[StyleCard]) -> Result<Vec<InsertStatement>, SqlError> {
        cards
            .iter()
            .map(|card| style_card(&self.ids.generate_id(), card))
            .collect()
    }

    /// # Errors
    ///
    /// Propagates the first [`SqlError`] from a row builder.
    pub fn glossary(&self, terms: &[GlossaryTerm]) -> Result<Vec<InsertStatement>, SqlError> {
        terms
            .iter()
            .map(|term| glossary_term(&self.ids.generate_id(), term))
            .collect()
    }

    /// One block per stage: the stage row followed by its task rows.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SqlError`] from a row builder.
    pub fn stages(&self, stages: &[DashboardStage]) -> Result<Vec<Vec<InsertStatement>>, SqlError> {
        (1u32..)
            .zip(stages)
            .map(|(sort_order, stage)| -> Result<Vec<InsertStatement>, SqlError> {
                let stage_id = self.ids.generate_id();
                let mut block = Vec::with_capacity(stage.tasks.len() + 1);
                block.push(dashboard_stage(&stage_id, stage, sort_order)?);
                for (task_order, task) in (1u32..).zip(&stage.tasks) {
                    block.push(stage_task(
                        &self.ids.generate_id(),
                        &stage_id,
                        task,
                        task_order,
                    )?);
                }
                Ok(block)
            })
            .collect()
    }

    /// # Errors
    ///
    /// Propagates the first [`SqlError`] from a row builder.
    pub fn prompts(&self, prompts: &[Prompt]) -> Result<Vec<InsertStatement>, SqlError> {
        prompts
            .iter()
            .map(|p| prompt(&self.ids.generate_id(), p))
            .collect()
    }

    /// One block per module: the module row followed by its lesson rows.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SqlError`] from a row builder.
    pub fn modules(&self, modules: &[CourseModule]) -> Result<Vec<Vec<InsertStatement>>, SqlError> {
        (1u32..)
            .zip(modules)
            .map(|(sort_order, module)| -> Result<Vec<InsertStatement>, SqlError> {
                let module_id = self.ids.generate_id();
                let mut block = Vec::with_capacity(module.lessons.len() + 1);
                block.push(course_module(&module_id, module, sort_order)?);
                for (lesson_order, item) in (1u32..).zip(&module.lessons) {
                    block.push(lesson(
                        &self.ids.generate_id(),
                        &module_id,
                        item,
                        lesson_order,
                    )?);
                }
                Ok(block)
            })
            .collect()
    }
}

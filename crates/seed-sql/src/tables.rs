//! Target tables and their column lists, in emission order.

/// A seeded table: name plus the explicit column list of its `INSERT`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const STYLE_CARDS: Table = Table {
    name: "style_cards",
    columns: &[
        "id",
        "name",
        "gradient",
        "image_url",
        "description",
        "long_description",
        "prompt",
        "tags",
        "category",
    ],
};

pub const GLOSSARY_TERMS: Table = Table {
    name: "glossary_terms",
    columns: &["id", "term", "slang", "definition", "category"],
};

pub const DASHBOARD_STAGES: Table = Table {
    name: "dashboard_stages",
    columns: &["id", "title", "subtitle", "sort_order"],
};

pub const STAGE_TASKS: Table = Table {
    name: "stage_tasks",
    columns: &["id", "stage_id", "title", "sort_order"],
};

pub const PROMPTS: Table = Table {
    name: "prompts",
    columns: &["id", "title", "description", "category", "usage", "content", "tags"],
};

pub const COURSE_MODULES: Table = Table {
    name: "course_modules",
    columns: &["id", "title", "subtitle", "sort_order"],
};

pub const LESSONS: Table = Table {
    name: "lessons",
    columns: &[
        "id",
        "module_id",
        "title",
        "description",
        "duration_minutes",
        "video_url",
        "sort_order",
    ],
};

/// Every seeded table, parents before children.
pub const ALL: [Table; 7] = [
    STYLE_CARDS,
    GLOSSARY_TERMS,
    DASHBOARD_STAGES,
    STAGE_TASKS,
    PROMPTS,
    COURSE_MODULES,
    LESSONS,
];

impl Table {
    /// Position of `column` in the column list.
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

//! The built-in LMS content, used when no dataset file is configured.

use crate::dataset::SeedDataset;
use crate::entities::{
    CourseModule, DashboardStage, GlossaryTerm, Lesson, Prompt, StageTask, StyleCard,
};

const DEMO_VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// The content the LMS ships with on a fresh database.
#[must_use]
pub fn dataset() -> SeedDataset {
    SeedDataset {
        styles: styles(),
        glossary: glossary(),
        stages: stages(),
        prompts: prompts(),
        modules: modules(),
    }
}

#[allow(clippy::too_many_arguments)]
fn style(
    name: &str,
    gradient: &str,
    image_url: &str,
    description: &str,
    long_description: &str,
    prompt: &str,
    tags: &[&str],
    category: &str,
) -> StyleCard {
    StyleCard {
        name: name.to_string(),
        gradient: gradient.to_string(),
        image_url: image_url.to_string(),
        description: description.to_string(),
        long_description: Some(long_description.to_string()),
        prompt: prompt.to_string(),
        tags: strings(tags),
        category: category.to_string(),
    }
}

fn styles() -> Vec<StyleCard> {
    vec![
        style(
            "Quiet Luxury",
            "from-stone-100 to-stone-300",
            "https://images.unsplash.com/photo-1616486338812-3dadae4b4f9d?q=80&w=1000&auto=format&fit=crop",
            "Тихая роскошь и сдержанность",
            "Эстетика \"старых денег\". Приглушённые нейтральные тона, натуральные материалы (лён, камень), изысканная типографика.",
            "Create a \"Quiet Luxury\" web interface...",
            &["Premium", "Serif", "Warm"],
            "Минимализм",
        ),
        style(
            "Neobrutalism",
            "from-yellow-300 to-pink-500",
            "https://images.unsplash.com/photo-1541701494587-cb58502866ab?q=80&w=1000&auto=format&fit=crop",
            "Яркий, честный, дерзкий",
            "Современная интерпретация брутализма. Высокий контраст, кислотные цвета, жесткие тени.",
            "Design a Neobrutalism interface...",
            &["Bold", "Contrast", "Raw"],
            "Яркие",
        ),
        style(
            "Bento Grid",
            "from-gray-200 to-gray-400",
            "https://images.unsplash.com/photo-1611162617474-5b21e879e113?q=80&w=1000&auto=format&fit=crop",
            "Структура и модульность",
            "Организация контента в виде ячеек разного размера.",
            "Create a Bento Grid layout design...",
            &["Grid", "Structure", "Apple"],
            "Минимализм",
        ),
        style(
            "Anti-Design",
            "from-lime-400 to-fuchsia-600",
            "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=1000&auto=format&fit=crop",
            "Хаос и самовыражение",
            "Стиль, нарушающий правила.",
            "Generate an Anti-Design interface...",
            &["Chaos", "Gen Z", "Acid"],
            "Яркие",
        ),
        style(
            "Human-Crafted",
            "from-orange-100 to-amber-200",
            "https://images.unsplash.com/photo-1544256671-50965365511b?q=80&w=1000&auto=format&fit=crop",
            "Тепло и несовершенство",
            "Противовес искусственному интеллекту.",
            "Design a Human-Crafted interface...",
            &["Organic", "Handmade", "Warm"],
            "Светлые",
        ),
    ]
}

fn term(term: &str, slang: Option<&str>, definition: &str, category: &str) -> GlossaryTerm {
    GlossaryTerm {
        term: term.to_string(),
        slang: slang.map(String::from),
        definition: definition.to_string(),
        category: category.to_string(),
    }
}

fn glossary() -> Vec<GlossaryTerm> {
    vec![
        term(
            "Frontend",
            Some("Фронтенд"),
            "Всё, что пользователь видит и с чем взаимодействует на сайте: кнопки, формы, анимации.",
            "Базовые",
        ),
        term(
            "Backend",
            Some("Бэкенд"),
            "Невидимая часть сайта: база данных, серверная логика, API. То, что работает «за кулисами».",
            "Базовые",
        ),
        term(
            "API",
            Some("АПИ"),
            "Application Programming Interface — мост между фронтендом и бэкендом.",
            "API",
        ),
        term(
            "Деплой",
            Some("Deploy"),
            "Запуск сайта на хостинге, чтобы он был доступен всем в интернете.",
            "Инструменты",
        ),
        term(
            "Верстка",
            None,
            "Создание HTML/CSS структуры сайта — его «скелета».",
            "Код",
        ),
    ]
}

fn stage(title: &str, subtitle: &str, tasks: &[&str]) -> DashboardStage {
    DashboardStage {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        tasks: tasks.iter().copied().map(StageTask::from).collect(),
    }
}

fn stages() -> Vec<DashboardStage> {
    vec![
        stage(
            "Подготовка",
            "Настрой свой рабочий процесс",
            &[
                "Установить VS Code",
                "Создать аккаунт на GitHub",
                "Зарегистрироваться в Vercel",
            ],
        ),
        stage(
            "Первый проект",
            "Создай своё первое приложение",
            &[
                "Сгенерировать код в AI Studio",
                "Деплоить на Vercel",
                "Протестировать на мобильном",
            ],
        ),
    ]
}

fn prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            title: "Лендинг для эксперта".to_string(),
            description: "Создай продающий лендинг для консультанта или эксперта.".to_string(),
            category: "Лендинг".to_string(),
            usage: "Опиши свою нишу, целевую аудиторию и ключевое преимущество.".to_string(),
            content: "Create a landing page for...".to_string(),
            tags: strings(&["landing", "expert", "sales"]),
        },
        Prompt {
            title: "Дашборд админ-панели".to_string(),
            description: "Генерация современного дашборда с метриками и графиками.".to_string(),
            category: "Веб-сервис".to_string(),
            usage: "Укажи какие метрики нужно отображать.".to_string(),
            content: "Create an admin dashboard with...".to_string(),
            tags: strings(&["dashboard", "admin", "metrics"]),
        },
    ]
}

fn lesson(title: &str, description: &str, duration_minutes: u32) -> Lesson {
    Lesson {
        title: title.to_string(),
        description: description.to_string(),
        duration_minutes,
        video_url: Some(DEMO_VIDEO.to_string()),
    }
}

fn modules() -> Vec<CourseModule> {
    vec![CourseModule {
        title: "Записанные уроки".to_string(),
        subtitle: "Основы вайб-кодинга".to_string(),
        lessons: vec![
            lesson("Введение в вайб-кодинг", "Знакомство с философией курса", 15),
            lesson("Первый промпт в AI Studio", "Учимся общаться с нейросетью", 20),
        ],
    }]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

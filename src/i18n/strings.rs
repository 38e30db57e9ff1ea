//! Centralized localized UI strings.
//!
//! Pages consume these tables directly; there is no transformation logic.
//! Keep the three tables structurally identical — every field filled in for
//! every language.

use crate::i18n::Language;

/// All localized user-facing strings for a language.
#[derive(Debug, Clone)]
pub struct PageStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_programs: &'static str,
    pub nav_research: &'static str,
    pub nav_news: &'static str,
    pub nav_contact: &'static str,

    // ==================== News Section ====================
    /// Section heading shown above the article grid
    pub news_heading: &'static str,

    /// Lead paragraph under the heading
    pub news_subheading: &'static str,

    /// Label of the "latest" category tab
    pub tab_latest: &'static str,

    /// Label of the "events" category tab
    pub tab_events: &'static str,

    /// Label of the "research" category tab
    pub tab_research: &'static str,

    /// Shown while articles are being fetched
    pub loading_articles: &'static str,

    /// Per-article link label
    pub read_more: &'static str,

    /// Link to the full news listing
    pub view_all_news: &'static str,

    // ==================== Accessibility ====================
    /// Tooltip of the accessibility options menu
    pub accessibility_options: &'static str,
}

/// English strings
pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    nav_home: "Home",
    nav_programs: "Programs",
    nav_research: "Research",
    nav_news: "News",
    nav_contact: "Contact",

    news_heading: "News & Updates",
    news_subheading:
        "Stay informed about the latest developments, achievements, and events at our institution.",
    tab_latest: "Latest News",
    tab_events: "Events",
    tab_research: "Research",
    loading_articles: "Loading articles...",
    read_more: "Read More",
    view_all_news: "View All News",

    accessibility_options: "Accessibility options",
};

/// Russian strings
pub const RUSSIAN_STRINGS: PageStrings = PageStrings {
    nav_home: "Главная",
    nav_programs: "Программы",
    nav_research: "Исследования",
    nav_news: "Новости",
    nav_contact: "Контакты",

    news_heading: "Новости и обновления",
    news_subheading:
        "Будьте в курсе последних событий, достижений и мероприятий нашего учреждения.",
    tab_latest: "Последние новости",
    tab_events: "События",
    tab_research: "Исследования",
    loading_articles: "Загрузка статей...",
    read_more: "Читать далее",
    view_all_news: "Посмотреть все новости",

    accessibility_options: "Параметры доступности",
};

/// Kazakh strings
pub const KAZAKH_STRINGS: PageStrings = PageStrings {
    nav_home: "Басты",
    nav_programs: "Бағдарламалар",
    nav_research: "Зерттеулер",
    nav_news: "Жаңалықтар",
    nav_contact: "Байланыс",

    news_heading: "Жаңалықтар мен жаңартулар",
    news_subheading:
        "Біздің мекемедегі соңғы дамулар, жетістіктер мен іс-шаралар туралы хабардар болыңыз.",
    tab_latest: "Соңғы жаңалықтар",
    tab_events: "Іс-шаралар",
    tab_research: "Зерттеулер",
    loading_articles: "Мақалалар жүктелуде...",
    read_more: "Толығырақ оқу",
    view_all_news: "Барлық жаңалықтарды көру",

    accessibility_options: "Қолжетімділік опциялары",
};

/// Get the string table for a language.
pub fn strings_for(language: Language) -> &'static PageStrings {
    match language.code() {
        "en" => &ENGLISH_STRINGS,
        "ru" => &RUSSIAN_STRINGS,
        _ => &KAZAKH_STRINGS,
    }
}

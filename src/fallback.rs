//! Embedded fallback dataset.
//!
//! Served whenever the CMS is unreachable or errors, and unconditionally for
//! languages the CMS is not localized to (Kazakh). The dataset is keyed by
//! language and category; every category in the UI tab set has an entry for
//! every enabled language so the page grid is never empty by accident.

use crate::cms::{Article, LATEST};
use crate::i18n::Language;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

/// Select the fallback list for a language/category combination.
///
/// `None` or the "latest" sentinel selects the latest list; an unknown
/// category yields an empty list (intentionally, mirroring an empty CMS
/// result for a category without content).
pub fn articles(language: Language, category: Option<&str>) -> Vec<Article> {
    let category = category.unwrap_or(LATEST);

    match language.code() {
        "en" => english(category),
        "ru" => russian(category),
        _ => kazakh(category),
    }
}

fn entry(
    id: i64,
    title: &str,
    excerpt: &str,
    date: &str,
    category: &str,
    slug: &str,
) -> Article {
    Article {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: None,
        category: category.to_string(),
        date: date.to_string(),
        slug: slug.to_string(),
        image: Some(PLACEHOLDER_IMAGE.to_string()),
        image_alt: None,
    }
}

fn english(category: &str) -> Vec<Article> {
    match category {
        LATEST => vec![
            entry(
                1,
                "New Research Center Opens for Sustainable Technology",
                "Our university inaugurates a state-of-the-art research facility dedicated to developing sustainable technologies for the future.",
                "2024-01-15",
                "Research",
                "new-research-center-sustainable-technology",
            ),
            entry(
                2,
                "International Student Exchange Program Expands",
                "We're excited to announce partnerships with 15 new universities across Europe and Asia for our exchange program.",
                "2024-01-12",
                "International",
                "international-exchange-program-expands",
            ),
            entry(
                3,
                "Alumni Achievement: Nobel Prize Winner",
                "Congratulations to Dr. Sarah Chen, Class of 2010, for receiving the Nobel Prize in Chemistry for her groundbreaking research.",
                "2024-01-10",
                "Alumni",
                "alumni-nobel-prize-winner",
            ),
        ],
        "events" => vec![
            entry(
                4,
                "Annual Science Fair 2024",
                "Join us for our biggest science fair featuring student innovations and research presentations.",
                "2024-02-20",
                "Events",
                "annual-science-fair-2024",
            ),
            entry(
                5,
                "Guest Lecture: Future of AI in Education",
                "Renowned AI researcher Dr. Michael Torres will discuss the transformative potential of artificial intelligence in education.",
                "2024-02-15",
                "Lecture",
                "guest-lecture-ai-education",
            ),
        ],
        "research" => vec![
            entry(
                6,
                "Breakthrough in Quantum Computing Research",
                "Our physics department achieves a major milestone in quantum computing with a new algorithm for error correction.",
                "2024-01-08",
                "Research",
                "quantum-computing-breakthrough",
            ),
            entry(
                7,
                "Medical School Develops New Treatment Protocol",
                "Innovative treatment approach for rare diseases shows promising results in clinical trials.",
                "2024-01-05",
                "Medical",
                "new-treatment-protocol",
            ),
        ],
        _ => Vec::new(),
    }
}

fn russian(category: &str) -> Vec<Article> {
    match category {
        LATEST => vec![
            entry(
                1,
                "Открытие нового исследовательского центра устойчивых технологий",
                "Наш университет открывает современный исследовательский центр, посвященный разработке устойчивых технологий будущего.",
                "2024-01-15",
                "Исследования",
                "novyj-issledovatelskij-centr",
            ),
            entry(
                2,
                "Расширение международной программы обмена студентами",
                "Мы рады объявить о партнерстве с 15 новыми университетами Европы и Азии для нашей программы обмена.",
                "2024-01-12",
                "Международное",
                "rasshirenie-programmy-obmena",
            ),
        ],
        "events" => vec![entry(
            4,
            "Ежегодная научная ярмарка 2024",
            "Присоединяйтесь к нашей крупнейшей научной ярмарке с инновациями студентов и исследовательскими презентациями.",
            "2024-02-20",
            "События",
            "nauchnaya-yarmarka-2024",
        )],
        "research" => vec![entry(
            6,
            "Прорыв в исследованиях квантовых вычислений",
            "Наш физический факультет достигает важной вехи в квантовых вычислениях с новым алгоритмом коррекции ошибок.",
            "2024-01-08",
            "Исследования",
            "proryv-kvantovye-vychisleniya",
        )],
        _ => Vec::new(),
    }
}

fn kazakh(category: &str) -> Vec<Article> {
    match category {
        LATEST => vec![
            entry(
                1,
                "Тұрақты технологиялар үшін жаңа зерттеу орталығы ашылды",
                "Біздің университет болашақтың тұрақты технологияларын дамытуға арналған заманауи зерттеу орталығын ашады.",
                "2024-01-15",
                "Зерттеу",
                "zhana-zertteu-ortalygy",
            ),
            entry(
                2,
                "Халықаралық студенттер алмасу бағдарламасы кеңейтілді",
                "Біз алмасу бағдарламамыз үшін Еуропа мен Азияның 15 жаңа университетімен серіктестік туралы хабарлаймыз.",
                "2024-01-12",
                "Халықаралық",
                "almasu-bagdarlamasy-kengeytildi",
            ),
        ],
        "events" => vec![entry(
            4,
            "2024 жылғы жыл сайынғы ғылыми жәрмеңке",
            "Студенттердің инновациялары мен зерттеу презентацияларын қамтитын ең үлкен ғылыми жәрмеңкеге қосылыңыз.",
            "2024-02-20",
            "Іс-шаралар",
            "gylymi-zharmenke-2024",
        )],
        "research" => vec![entry(
            6,
            "Кванттық есептеу зерттеулеріндегі жетістік",
            "Біздің физика факультеті қателерді түзету үшін жаңа алгоритммен кванттық есептеуде маңызды жетістікке жетті.",
            "2024-01-08",
            "Зерттеу",
            "kvanttyk-esepteu-zhetistigi",
        )],
        _ => Vec::new(),
    }
}

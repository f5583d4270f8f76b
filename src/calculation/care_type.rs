//! Care-type normalization.
//!
//! Organizations name their care offerings freely ("BSO De Boomhut",
//! "Kinderdagverblijf Zonnetje"). This module maps such names onto the
//! three canonical categories used by subsidy schedules.

use crate::models::CareCategory;

const AFTER_SCHOOL_KEYWORDS: &[&str] = &[
    "after school",
    "after-school",
    "afterschool",
    "out of school",
    "before school",
    "buitenschoolse",
    "naschoolse",
    "voorschoolse",
    "tussenschoolse",
];

const AFTER_SCHOOL_ACRONYMS: &[&str] = &["bso"];

const CHILDMINDER_KEYWORDS: &[&str] = &[
    "childminder",
    "child minder",
    "child-minder",
    "gastouder",
    "home-based",
    "home based",
    "family day care",
];

const DAYCARE_KEYWORDS: &[&str] = &[
    "daycare",
    "day care",
    "day-care",
    "nursery",
    "kinderdagverblijf",
    "dagopvang",
    "peuteropvang",
];

const DAYCARE_ACRONYMS: &[&str] = &["kdv"];

/// Classifies a free-text care-offering name.
///
/// The name is lower-cased and checked against keyword sets for after-school
/// care, childminders and daycare, in that order. Keywords match as substrings;
/// short acronyms such as "BSO" and "KDV" only match as whole words. Names matching
/// nothing default to [`CareCategory::Daycare`]. This is a best-effort
/// heuristic; callers already holding a canonical category should use it directly.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::normalize_care_category;
/// use subsidy_engine::models::CareCategory;
///
/// assert_eq!(normalize_care_category("Gastouderbureau West"), CareCategory::Childminder);
/// assert_eq!(normalize_care_category("After School Club"), CareCategory::AfterSchoolCare);
/// assert_eq!(normalize_care_category("Little Stars"), CareCategory::Daycare);
/// ```
pub fn normalize_care_category(free_text: &str) -> CareCategory {
    let text = free_text.to_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    [
        (AFTER_SCHOOL_KEYWORDS, AFTER_SCHOOL_ACRONYMS, CareCategory::AfterSchoolCare),
        (CHILDMINDER_KEYWORDS, &[][..], CareCategory::Childminder),
        (DAYCARE_KEYWORDS, DAYCARE_ACRONYMS, CareCategory::Daycare),
    ]
    .into_iter()
    .find(|(keywords, acronyms, _)| {
        keywords.iter().any(|k| text.contains(k)) || acronyms.iter().any(|a| words.contains(a))
    })
    .map(|(_, _, category)| category)
    .unwrap_or(CareCategory::Daycare)
}

//! Demo data loaded into the in-memory store.

use chrono::{DateTime, NaiveDate, Utc};

use domain::{
    Course, Language, LanguageProgress, ProficiencyLevel, User, UserProgress, UserRole,
};

/// Midnight UTC on the given day.
fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn language(
    id: &str,
    name: &str,
    code: &str,
    region: &str,
    speaker_count: u64,
    difficulty: ProficiencyLevel,
    description: &str,
    is_active: bool,
) -> Language {
    let created = day(2024, 1, 15);
    Language {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        region: region.to_string(),
        is_active,
        description: description.to_string(),
        intro_video_url: Some(format!("/videos/intro-{}.mp4", code)),
        icon_url: Some(format!("/icons/languages/{}.svg", code)),
        speaker_count,
        difficulty,
        created_at: created,
        updated_at: created,
    }
}

pub fn languages() -> Vec<Language> {
    use ProficiencyLevel::*;

    vec![
        language(
            "1",
            "Yoruba",
            "yo",
            "West Africa",
            45_000_000,
            Intermediate,
            "A tonal language of south-western Nigeria, Benin and Togo with a rich oral literature.",
            true,
        ),
        language(
            "2",
            "Zulu",
            "zu",
            "Southern Africa",
            12_000_000,
            Intermediate,
            "A Bantu language of South Africa known for its click consonants.",
            true,
        ),
        language(
            "3",
            "Swahili",
            "sw",
            "East Africa",
            15_000_000,
            Beginner,
            "The lingua franca of the Great Lakes, spoken across Kenya, Tanzania and Uganda.",
            true,
        ),
        language(
            "4",
            "Amharic",
            "am",
            "East Africa",
            32_000_000,
            Advanced,
            "The working language of Ethiopia, written in the Ge'ez script.",
            true,
        ),
        language(
            "5",
            "Hausa",
            "ha",
            "West Africa",
            50_000_000,
            Beginner,
            "A Chadic language used for trade across the Sahel.",
            true,
        ),
        language(
            "6",
            "Igbo",
            "ig",
            "West Africa",
            27_000_000,
            Intermediate,
            "A tonal language of south-eastern Nigeria. Lessons are in preparation.",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    language_id: &str,
    name: &str,
    description: &str,
    level: ProficiencyLevel,
    curriculum_grade: Option<&str>,
    lesson_count: u32,
    estimated_hours: u32,
) -> Course {
    let created = day(2024, 2, 1);
    Course {
        id: id.to_string(),
        language_id: language_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level,
        is_curriculum_aligned: curriculum_grade.is_some(),
        curriculum_grade: curriculum_grade.map(str::to_string),
        icon_url: Some(format!("/icons/courses/{}.svg", id)),
        lesson_count,
        estimated_hours,
        created_at: created,
        updated_at: created,
    }
}

pub fn courses() -> Vec<Course> {
    use ProficiencyLevel::*;

    vec![
        course(
            "1",
            "1",
            "Yoruba Foundations",
            "Tones, greetings and everyday phrases.",
            Beginner,
            Some("Grade 4"),
            24,
            12,
        ),
        course(
            "2",
            "1",
            "Yoruba in Conversation",
            "Market, family and festival dialogues.",
            Intermediate,
            None,
            30,
            20,
        ),
        course(
            "3",
            "3",
            "Swahili for Beginners",
            "Noun classes, greetings and numbers.",
            Beginner,
            Some("Grade 5"),
            20,
            10,
        ),
        course(
            "4",
            "3",
            "Swahili Intermediate",
            "Verb tenses, travel and storytelling.",
            Intermediate,
            None,
            28,
            18,
        ),
        course(
            "5",
            "3",
            "Swahili Advanced",
            "Poetry, news and formal writing.",
            Advanced,
            None,
            32,
            26,
        ),
        course(
            "6",
            "2",
            "Zulu Essentials",
            "Clicks, greetings and respect forms.",
            Beginner,
            None,
            18,
            9,
        ),
        course(
            "7",
            "4",
            "Amharic Script and Sounds",
            "The fidel syllabary and core vocabulary.",
            Beginner,
            None,
            22,
            15,
        ),
        course(
            "8",
            "5",
            "Hausa Greetings and Market Talk",
            "Greetings, bargaining and counting.",
            Beginner,
            None,
            16,
            8,
        ),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "amara.okafor@example.com".to_string(),
            phone_number: Some("+2348012345678".to_string()),
            full_name: "Amara Okafor".to_string(),
            preferred_language: "en".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2009, 4, 12),
            region: Some("West Africa".to_string()),
            role: UserRole::Student,
            created_at: day(2024, 3, 1),
            updated_at: day(2024, 3, 1),
        },
        User {
            id: "2".to_string(),
            email: "baraka.mwangi@example.com".to_string(),
            phone_number: None,
            full_name: "Baraka Mwangi".to_string(),
            preferred_language: "sw".to_string(),
            date_of_birth: None,
            region: Some("East Africa".to_string()),
            role: UserRole::Teacher,
            created_at: day(2024, 3, 5),
            updated_at: day(2024, 3, 5),
        },
        User {
            id: "3".to_string(),
            email: "thandiwe.dlamini@example.com".to_string(),
            phone_number: None,
            full_name: "Thandiwe Dlamini".to_string(),
            preferred_language: "zu".to_string(),
            date_of_birth: None,
            region: None,
            role: UserRole::Admin,
            created_at: day(2024, 3, 10),
            updated_at: day(2024, 3, 10),
        },
    ]
}

pub fn progress() -> Vec<UserProgress> {
    vec![
        UserProgress {
            user_id: "1".to_string(),
            languages: vec![
                LanguageProgress {
                    language_id: "1".to_string(),
                    progress: 0.45,
                    xp_earned: 1250,
                    streak: 7,
                    last_activity: day(2024, 6, 20),
                },
                LanguageProgress {
                    language_id: "3".to_string(),
                    progress: 0.2,
                    xp_earned: 400,
                    streak: 3,
                    last_activity: day(2024, 6, 18),
                },
            ],
        },
        UserProgress {
            user_id: "2".to_string(),
            languages: vec![LanguageProgress {
                language_id: "2".to_string(),
                progress: 0.1,
                xp_earned: 150,
                streak: 1,
                last_activity: day(2024, 6, 1),
            }],
        },
    ]
}

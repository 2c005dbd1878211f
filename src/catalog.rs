//! Question Catalog Module
//!
//! Owns the ordered, immutable question set the assessment runs over.
//! The built-in catalog ships the 16 IIoT questions; alternative catalogs
//! can be parsed from YAML text and are validated against the same
//! invariants the scoring engine relies on.

use crate::types::{Question, QuestionKind, Section};

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Question with empty id")]
    EmptyId,

    #[error("Duplicate question id '{id}'")]
    DuplicateId { id: String },

    #[error("Single-choice question '{id}' has no options")]
    MissingOptions { id: String },

    #[error("Rating-scale question '{id}' carries options")]
    UnexpectedOptions { id: String },

    #[error("WISCAR question '{id}' has unknown subsection '{subsection}'")]
    UnknownWiscarSubsection { id: String, subsection: String },

    #[error("Question '{id}' has non-positive weight")]
    InvalidWeight { id: String },
}

/// Parses a question catalog from YAML text and validates it.
pub fn questions_from_yaml(yaml: &str) -> Result<Vec<Question>, CatalogError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    validate(&questions)?;
    Ok(questions)
}

/// Checks the catalog invariants scoring depends on: unique non-empty ids,
/// options present exactly for single-choice questions, WISCAR subsections
/// naming a known dimension, positive weights.
pub fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen_ids = std::collections::HashSet::new();

    for question in questions {
        if question.id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !seen_ids.insert(question.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: question.id.clone(),
            });
        }
        if question.weight == 0 {
            return Err(CatalogError::InvalidWeight {
                id: question.id.clone(),
            });
        }
        match question.kind {
            QuestionKind::SingleChoice => {
                let has_options = question
                    .options
                    .as_ref()
                    .map(|o| !o.is_empty())
                    .unwrap_or(false);
                if !has_options {
                    return Err(CatalogError::MissingOptions {
                        id: question.id.clone(),
                    });
                }
            }
            QuestionKind::RatingScale => {
                if question.options.is_some() {
                    return Err(CatalogError::UnexpectedOptions {
                        id: question.id.clone(),
                    });
                }
            }
        }
        if question.section == Section::Wiscar && question.wiscar_dimension().is_none() {
            return Err(CatalogError::UnknownWiscarSubsection {
                id: question.id.clone(),
                subsection: question.subsection.clone(),
            });
        }
    }

    Ok(())
}

pub fn questions_by_section<'a>(questions: &'a [Question], section: Section) -> Vec<&'a Question> {
    questions.iter().filter(|q| q.section == section).collect()
}

pub fn total_question_count(questions: &[Question]) -> usize {
    questions.len()
}

fn likert(
    id: &str,
    section: Section,
    subsection: &str,
    prompt: &str,
    weight: u32,
    category: &str,
) -> Question {
    Question {
        id: id.to_string(),
        section,
        subsection: subsection.to_string(),
        kind: QuestionKind::RatingScale,
        prompt: prompt.to_string(),
        options: None,
        weight,
        category: category.to_string(),
    }
}

fn choice(
    id: &str,
    section: Section,
    subsection: &str,
    prompt: &str,
    options: &[&str],
    weight: u32,
    category: &str,
) -> Question {
    Question {
        id: id.to_string(),
        section,
        subsection: subsection.to_string(),
        kind: QuestionKind::SingleChoice,
        prompt: prompt.to_string(),
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        weight,
        category: category.to_string(),
    }
}

/// The fixed 16-question IIoT catalog: 6 psychometric, 4 technical, and one
/// WISCAR question per dimension.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        // Psychometric - interest (Holland codes)
        likert(
            "psy_01",
            Section::Psychometric,
            "interest",
            "You enjoy working with physical equipment and machinery more than abstract concepts.",
            1,
            "realistic",
        ),
        likert(
            "psy_02",
            Section::Psychometric,
            "interest",
            "You find satisfaction in troubleshooting and fixing complex technical problems.",
            1,
            "investigative",
        ),
        likert(
            "psy_03",
            Section::Psychometric,
            "interest",
            "You prefer structured, logical approaches to solving problems.",
            1,
            "conventional",
        ),
        likert(
            "psy_04",
            Section::Psychometric,
            "interest",
            "You are curious about how different industrial systems work together.",
            1,
            "investigative",
        ),
        // Psychometric - personality fit
        choice(
            "psy_05",
            Section::Psychometric,
            "personality",
            "A sensor on the production line starts giving inconsistent readings. How would you approach this?",
            &[
                "Immediately replace the sensor with a new one",
                "Systematically check calibration, wiring, and environmental factors",
                "Ask a colleague to handle it while you focus on other tasks",
                "Document the issue and wait for maintenance to fix it",
            ],
            2,
            "conscientiousness",
        ),
        likert(
            "psy_06",
            Section::Psychometric,
            "personality",
            "You feel comfortable working in industrial environments with noise and machinery.",
            1,
            "stress_tolerance",
        ),
        // Technical - prerequisite knowledge
        choice(
            "tech_01",
            Section::Technical,
            "prerequisites",
            "What does SCADA stand for?",
            &[
                "System Control and Data Acquisition",
                "Supervisory Control and Data Acquisition",
                "Sensor Control and Data Analysis",
                "System Configuration and Device Access",
            ],
            1,
            "domain_knowledge",
        ),
        choice(
            "tech_02",
            Section::Technical,
            "prerequisites",
            "Which protocol is commonly used for industrial communication?",
            &["HTTP", "FTP", "Modbus", "SMTP"],
            1,
            "protocols",
        ),
        choice(
            "tech_03",
            Section::Technical,
            "prerequisites",
            "What is the primary purpose of a PLC?",
            &[
                "Process data analytics",
                "Control industrial processes automatically",
                "Manage network security",
                "Store historical data",
            ],
            1,
            "automation",
        ),
        choice(
            "tech_04",
            Section::Technical,
            "networking",
            "Which of these is a key difference between OPC-UA and MQTT?",
            &[
                "OPC-UA is faster than MQTT",
                "MQTT is only for web applications",
                "OPC-UA provides rich semantic modeling, MQTT is lightweight messaging",
                "They serve identical purposes",
            ],
            2,
            "protocols",
        ),
        // WISCAR framework
        likert(
            "wiscar_01",
            Section::Wiscar,
            "will",
            "When facing a complex technical challenge, you persist until you find a solution.",
            2,
            "grit",
        ),
        likert(
            "wiscar_02",
            Section::Wiscar,
            "interest",
            "You genuinely enjoy learning about industrial automation and IoT technologies.",
            2,
            "intrinsic_motivation",
        ),
        likert(
            "wiscar_03",
            Section::Wiscar,
            "skill",
            "You have experience with programming languages like Python, C, or ladder logic.",
            1,
            "programming",
        ),
        choice(
            "wiscar_04",
            Section::Wiscar,
            "cognitive",
            "You need to integrate data from 5 different machines into a central dashboard. What's your first step?",
            &[
                "Start coding the dashboard interface immediately",
                "Map out data sources, formats, and communication protocols",
                "Buy new software to handle the integration",
                "Ask each machine vendor for their standard solution",
            ],
            2,
            "systems_thinking",
        ),
        likert(
            "wiscar_05",
            Section::Wiscar,
            "ability",
            "You enjoy learning new technologies and adapting to changing industry standards.",
            1,
            "growth_mindset",
        ),
        likert(
            "wiscar_06",
            Section::Wiscar,
            "real_world",
            "Working in a role that bridges IT and operational technology excites you.",
            2,
            "job_fit",
        ),
    ]
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level section of the assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Psychometric => "psychometric",
            Section::Technical => "technical",
            Section::Wiscar => "wiscar",
        }
    }

    /// Display heading used by the results breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Psychometric => "Psychometric Fit",
            Section::Technical => "Technical Readiness",
            Section::Wiscar => "WISCAR Framework",
        }
    }
}

/// The six WISCAR evaluation dimensions.
///
/// Every `Section::Wiscar` question must carry one of these as its
/// subsection; scoring partitions responses on that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "real_world",
        }
    }

    /// Display label used by the radar chart.
    pub fn label(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Skill",
            WiscarDimension::Cognitive => "Cognitive",
            WiscarDimension::Ability => "Ability",
            WiscarDimension::RealWorld => "Real-World Fit",
        }
    }

    pub fn from_subsection(subsection: &str) -> Option<Self> {
        match subsection {
            "will" => Some(WiscarDimension::Will),
            "interest" => Some(WiscarDimension::Interest),
            "skill" => Some(WiscarDimension::Skill),
            "cognitive" => Some(WiscarDimension::Cognitive),
            "ability" => Some(WiscarDimension::Ability),
            "real_world" => Some(WiscarDimension::RealWorld),
            _ => None,
        }
    }
}

/// How a question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// 1-5 agreement scale.
    #[serde(rename = "likert")]
    RatingScale,
    /// One of an ordered option list; the answer value is the 1-based
    /// option index.
    #[serde(rename = "choice")]
    SingleChoice,
}

/// Anchor label for a rating-scale value, or `None` outside 1-5.
pub fn rating_scale_label(value: u32) -> Option<&'static str> {
    match value {
        1 => Some("Strongly Disagree"),
        2 => Some("Disagree"),
        3 => Some("Neutral"),
        4 => Some("Agree"),
        5 => Some("Strongly Agree"),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub section: Section,
    pub subsection: String,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Present only for single-choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Relative importance from the source catalog. Carried as data but not
    /// applied in scoring arithmetic.
    pub weight: u32,
    /// Free-form classification label, informational only.
    pub category: String,
}

impl Question {
    /// Largest answer value this question can produce.
    pub fn max_value(&self) -> u32 {
        match self.kind {
            QuestionKind::RatingScale => 5,
            QuestionKind::SingleChoice => {
                self.options.as_ref().map(|o| o.len() as u32).unwrap_or(0)
            }
        }
    }

    /// The WISCAR dimension this question feeds, if its subsection names one.
    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        WiscarDimension::from_subsection(&self.subsection)
    }
}

/// A recorded answer. At most one current response exists per question id;
/// re-answering replaces the prior one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    /// 1-5 for rating-scale, 1..=options.len() for single-choice. The
    /// presentation layer never produces out-of-range values; this layer does
    /// not re-check them.
    pub value: u32,
    pub answered_at: DateTime<Utc>,
}

impl Response {
    pub fn new(question_id: &str, value: u32) -> Self {
        Self {
            question_id: question_id.to_string(),
            value,
            answered_at: Utc::now(),
        }
    }
}

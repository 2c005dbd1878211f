//! Recommendation Module
//!
//! Maps the computed overall and technical scores to the user-facing verdict:
//! the yes/maybe/no recommendation, narrative feedback, next-step lists, and
//! the filtered career matches. All mappings are deterministic and keyed by
//! the two fixed thresholds below.

use serde::{Deserialize, Serialize};

/// Overall score at or above which the assessment recommends the field.
pub const RECOMMEND_YES_THRESHOLD: u32 = 70;
/// Overall score below which the assessment recommends against the field.
pub const RECOMMEND_NO_THRESHOLD: u32 = 40;
/// Careers must score strictly above this match percentage to be shown.
const CAREER_MATCH_FLOOR: u32 = 30;

/// Ternary assessment outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// `overall >= 70` is yes, `overall < 40` is no, anything between is
    /// maybe.
    pub fn from_overall_score(overall: u32) -> Self {
        if overall >= RECOMMEND_YES_THRESHOLD {
            Recommendation::Yes
        } else if overall < RECOMMEND_NO_THRESHOLD {
            Recommendation::No
        } else {
            Recommendation::Maybe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }

    /// Headline shown on the results page.
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::Yes => "Strong Fit - Recommended",
            Recommendation::Maybe => "Potential Fit - With Development",
            Recommendation::No => "Not Recommended at This Time",
        }
    }
}

/// Display band for an individual 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,     // >= 70
    Developing, // 40 - 69
    Weak,       // < 40
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= RECOMMEND_YES_THRESHOLD {
            ScoreBand::Strong
        } else if score >= RECOMMEND_NO_THRESHOLD {
            ScoreBand::Developing
        } else {
            ScoreBand::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Developing => "developing",
            ScoreBand::Weak => "weak",
        }
    }
}

/// Narrative feedback keyed by the same thresholds as the recommendation.
pub fn feedback_for(overall: u32) -> &'static str {
    if overall >= RECOMMEND_YES_THRESHOLD {
        "Excellent! You show strong alignment with IIoT Integration. Your combination of technical aptitude, genuine interest, and cognitive fit suggests you'd thrive in this field. Consider starting with hands-on projects to build practical experience."
    } else if overall >= RECOMMEND_NO_THRESHOLD {
        "You show potential for IIoT Integration with some areas for development. Focus on strengthening your technical foundation while exploring the field through online courses and maker projects to confirm your interest."
    } else {
        "IIoT Integration may not be the best fit based on your current profile. Consider exploring related fields like data analysis, user experience design, or project management where your other strengths might be better utilized."
    }
}

/// The fixed five-item next-step list for a recommendation bucket.
pub fn next_steps_for(recommendation: Recommendation) -> Vec<String> {
    let steps: [&str; 5] = match recommendation {
        Recommendation::Yes => [
            "Start with PLC programming fundamentals (Ladder Logic)",
            "Learn industrial communication protocols (Modbus, OPC-UA)",
            "Get hands-on with Arduino/Raspberry Pi IoT projects",
            "Explore SCADA software like Ignition or WinCC",
            "Consider industrial automation certifications",
        ],
        Recommendation::Maybe => [
            "Take an introductory course in industrial automation",
            "Try Arduino starter kits to gauge your interest",
            "Shadow an automation engineer or visit industrial facilities",
            "Strengthen programming fundamentals (Python recommended)",
            "Explore online simulations of industrial processes",
        ],
        Recommendation::No => [
            "Consider data analysis or business intelligence roles",
            "Explore UX/UI design for industrial applications",
            "Look into project management in tech industries",
            "Consider sales engineering for technical products",
            "Explore quality assurance and testing roles",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

/// A candidate role annotated with its computed fit percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub role: String,
    pub description: String,
    pub match_percentage: u32,
    pub required_skills: Vec<String>,
    pub salary_range: String,
}

fn career(
    role: &str,
    description: &str,
    match_percentage: u32,
    required_skills: &[&str],
    salary_range: &str,
) -> CareerMatch {
    CareerMatch {
        role: role.to_string(),
        description: description.to_string(),
        match_percentage,
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        salary_range: salary_range.to_string(),
    }
}

/// Computes the career catalog against the given scores and drops entries at
/// or below the match floor. Catalog order is preserved.
pub fn career_matches(overall: u32, technical: u32) -> Vec<CareerMatch> {
    let base = vec![
        career(
            "IIoT Integrator",
            "Connect OT and IT systems using IoT technologies",
            overall.saturating_sub(10),
            &[
                "PLC Programming",
                "Industrial Protocols",
                "IoT Platforms",
                "Networking",
            ],
            "$65,000 - $95,000",
        ),
        career(
            "Automation Engineer",
            "Design and implement automated industrial systems",
            overall.saturating_sub(5),
            &[
                "SCADA",
                "PLC Programming",
                "Process Control",
                "Electrical Systems",
            ],
            "$70,000 - $105,000",
        ),
        career(
            "Controls Engineer",
            "Design control systems for industrial processes",
            technical,
            &[
                "Control Theory",
                "PID Tuning",
                "Instrumentation",
                "Safety Systems",
            ],
            "$75,000 - $110,000",
        ),
        career(
            "Industrial Data Analyst",
            "Analyze sensor data for operational insights",
            overall.saturating_sub(20),
            &["Python", "Time Series Analysis", "SQL", "Data Visualization"],
            "$60,000 - $85,000",
        ),
    ];

    base.into_iter()
        .filter(|m| m.match_percentage > CAREER_MATCH_FLOOR)
        .collect()
}

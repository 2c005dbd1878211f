//! Scoring Engine Module
//!
//! Provides DETERMINISTIC scoring for a completed response set.
//! No AI/ML is used - scores are calculated from recorded answers only.
//!
//! Formulas:
//! - section score = round(sum(values) / (count x 5) x 100)
//! - WISCAR dimension = round(sum(values) / 5 x 20)
//! - overall = round((psychometric + technical + mean(dimensions)) / 3)
//!
//! The WISCAR divisor is the fixed scale maximum, not the matching-response
//! count: the shipped catalog carries exactly one 1-5 question per dimension,
//! and the arithmetic is kept bit-for-bit with the source product. Sections
//! with no responses score 0.

use crate::recommend::{self, CareerMatch, Recommendation};
use crate::types::{Question, Response, Section, WiscarDimension};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Normalizing denominator for every score formula.
pub const MAX_RATING_VALUE: u32 = 5;

/// The six WISCAR sub-dimension scores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u32 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    fn set(&mut self, dimension: WiscarDimension, score: u32) {
        match dimension {
            WiscarDimension::Will => self.will = score,
            WiscarDimension::Interest => self.interest = score,
            WiscarDimension::Skill => self.skill = score,
            WiscarDimension::Cognitive => self.cognitive = score,
            WiscarDimension::Ability => self.ability = score,
            WiscarDimension::RealWorld => self.real_world = score,
        }
    }

    /// Unrounded mean across the six dimensions, as fed into the overall
    /// score.
    pub fn mean(&self) -> f64 {
        let sum: u32 = WiscarDimension::ALL.iter().map(|d| self.get(*d)).sum();
        f64::from(sum) / WiscarDimension::ALL.len() as f64
    }

    /// Dimension/score pairs in radar-chart order.
    pub fn as_pairs(&self) -> [(WiscarDimension, u32); 6] {
        [
            (WiscarDimension::Will, self.will),
            (WiscarDimension::Interest, self.interest),
            (WiscarDimension::Skill, self.skill),
            (WiscarDimension::Cognitive, self.cognitive),
            (WiscarDimension::Ability, self.ability),
            (WiscarDimension::RealWorld, self.real_world),
        ]
    }
}

/// Final assessment report, created once at completion and immutable
/// thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Opaque per-attempt identifier.
    pub user_id: String,
    pub psychometric_score: u32,
    pub technical_score: u32,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub feedback: String,
    pub next_steps: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Serializes the result for the display boundary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn find_question<'a>(questions: &'a [Question], id: &str) -> Option<&'a Question> {
    questions.iter().find(|q| q.id == id)
}

/// Normalized 0-100 score for a section: response values summed and divided
/// by `count x 5`. The denominator uses the rating-scale maximum even for
/// single-choice questions valued on a shorter range. Zero responses score 0.
pub fn section_score(
    questions: &[Question],
    responses: &HashMap<String, Response>,
    section: Section,
) -> u32 {
    let values: Vec<u32> = responses
        .values()
        .filter(|r| {
            find_question(questions, &r.question_id)
                .map(|q| q.section == section)
                .unwrap_or(false)
        })
        .map(|r| r.value)
        .collect();

    if values.is_empty() {
        return 0;
    }

    let sum: u32 = values.iter().sum();
    let max = values.len() as f64 * f64::from(MAX_RATING_VALUE);
    (f64::from(sum) / max * 100.0).round() as u32
}

/// Score for one WISCAR dimension: matching values summed, divided by the
/// fixed constant 5, and scaled by 20. With one max-5 question per dimension
/// this tops out at 20; extra matching responses push it higher.
pub fn wiscar_dimension_score(
    questions: &[Question],
    responses: &HashMap<String, Response>,
    dimension: WiscarDimension,
) -> u32 {
    let sum: u32 = responses
        .values()
        .filter(|r| {
            find_question(questions, &r.question_id)
                .map(|q| q.section == Section::Wiscar && q.wiscar_dimension() == Some(dimension))
                .unwrap_or(false)
        })
        .map(|r| r.value)
        .sum();

    (f64::from(sum) / f64::from(MAX_RATING_VALUE) * 20.0).round() as u32
}

pub fn wiscar_scores(
    questions: &[Question],
    responses: &HashMap<String, Response>,
) -> WiscarScores {
    let mut scores = WiscarScores::default();
    for dimension in WiscarDimension::ALL {
        scores.set(
            dimension,
            wiscar_dimension_score(questions, responses, dimension),
        );
    }
    scores
}

/// Rounded mean of the two section scores and the unrounded WISCAR mean.
pub fn overall_score(psychometric: u32, technical: u32, wiscar: &WiscarScores) -> u32 {
    ((f64::from(psychometric) + f64::from(technical) + wiscar.mean()) / 3.0).round() as u32
}

/// Reduces the full response set to the final report. Total over any input:
/// empty or partial response sets produce a result with zero scores rather
/// than an error.
pub fn compute_result(
    questions: &[Question],
    responses: &HashMap<String, Response>,
) -> AssessmentResult {
    let psychometric_score = section_score(questions, responses, Section::Psychometric);
    let technical_score = section_score(questions, responses, Section::Technical);
    let wiscar = wiscar_scores(questions, responses);
    let overall = overall_score(psychometric_score, technical_score, &wiscar);
    let recommendation = Recommendation::from_overall_score(overall);

    log::debug!(
        "[SCORING] psychometric={} technical={} wiscar_mean={:.1} overall={} recommendation={}",
        psychometric_score,
        technical_score,
        wiscar.mean(),
        overall,
        recommendation.as_str()
    );

    AssessmentResult {
        user_id: format!("user-{}", Uuid::new_v4()),
        psychometric_score,
        technical_score,
        wiscar_scores: wiscar,
        overall_score: overall,
        recommendation,
        feedback: recommend::feedback_for(overall).to_string(),
        next_steps: recommend::next_steps_for(recommendation),
        career_matches: recommend::career_matches(overall, technical_score),
        completed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;

    fn likert_question(id: &str, section: Section, subsection: &str) -> Question {
        Question {
            id: id.to_string(),
            section,
            subsection: subsection.to_string(),
            kind: QuestionKind::RatingScale,
            prompt: format!("Test question {}", id),
            options: None,
            weight: 1,
            category: "test".to_string(),
        }
    }

    fn respond(responses: &mut HashMap<String, Response>, id: &str, value: u32) {
        responses.insert(id.to_string(), Response::new(id, value));
    }

    #[test]
    fn test_section_score_normalizes_to_percent() {
        let questions = vec![
            likert_question("p1", Section::Psychometric, "interest"),
            likert_question("p2", Section::Psychometric, "interest"),
        ];
        let mut responses = HashMap::new();
        respond(&mut responses, "p1", 4);
        respond(&mut responses, "p2", 4);

        // (4 + 4) / (2 x 5) = 80%
        assert_eq!(
            section_score(&questions, &responses, Section::Psychometric),
            80
        );
    }

    #[test]
    fn test_section_score_empty_is_zero() {
        let questions = vec![likert_question("p1", Section::Psychometric, "interest")];
        let responses = HashMap::new();
        assert_eq!(
            section_score(&questions, &responses, Section::Psychometric),
            0
        );
        assert_eq!(section_score(&[], &responses, Section::Technical), 0);
    }

    #[test]
    fn test_section_score_ignores_other_sections_and_unknown_ids() {
        let questions = vec![
            likert_question("p1", Section::Psychometric, "interest"),
            likert_question("t1", Section::Technical, "prerequisites"),
        ];
        let mut responses = HashMap::new();
        respond(&mut responses, "p1", 5);
        respond(&mut responses, "t1", 1);
        respond(&mut responses, "ghost", 5);

        assert_eq!(
            section_score(&questions, &responses, Section::Psychometric),
            100
        );
        assert_eq!(section_score(&questions, &responses, Section::Technical), 20);
    }

    #[test]
    fn test_rating_scale_psychometric_score_range() {
        // All-1 answers floor the section at 20%, all-5 answers cap it at 100%.
        let questions: Vec<Question> = (0..6)
            .map(|i| likert_question(&format!("p{}", i), Section::Psychometric, "interest"))
            .collect();

        let mut low = HashMap::new();
        let mut high = HashMap::new();
        for q in &questions {
            respond(&mut low, &q.id, 1);
            respond(&mut high, &q.id, 5);
        }

        assert_eq!(section_score(&questions, &low, Section::Psychometric), 20);
        assert_eq!(section_score(&questions, &high, Section::Psychometric), 100);
    }

    #[test]
    fn test_wiscar_dimension_fixed_divisor() {
        let questions = vec![likert_question("w1", Section::Wiscar, "will")];
        let mut responses = HashMap::new();
        respond(&mut responses, "w1", 5);

        // 5 / 5 x 20 = 20: a single max answer contributes 20 points.
        assert_eq!(
            wiscar_dimension_score(&questions, &responses, WiscarDimension::Will),
            20
        );
        // No responses for the dimension score 0.
        assert_eq!(
            wiscar_dimension_score(&questions, &responses, WiscarDimension::Skill),
            0
        );
    }

    #[test]
    fn test_wiscar_dimension_does_not_rescale_by_count() {
        // Two questions in one dimension exceed the nominal 20-point ceiling:
        // the divisor stays 5 regardless of how many responses match.
        let questions = vec![
            likert_question("w1", Section::Wiscar, "will"),
            likert_question("w2", Section::Wiscar, "will"),
        ];
        let mut responses = HashMap::new();
        respond(&mut responses, "w1", 5);
        respond(&mut responses, "w2", 5);

        assert_eq!(
            wiscar_dimension_score(&questions, &responses, WiscarDimension::Will),
            40
        );
    }

    #[test]
    fn test_wiscar_requires_wiscar_section() {
        // A psychometric question whose subsection happens to be "interest"
        // must not leak into the WISCAR interest dimension.
        let questions = vec![
            likert_question("p1", Section::Psychometric, "interest"),
            likert_question("w1", Section::Wiscar, "interest"),
        ];
        let mut responses = HashMap::new();
        respond(&mut responses, "p1", 5);
        respond(&mut responses, "w1", 5);

        assert_eq!(
            wiscar_dimension_score(&questions, &responses, WiscarDimension::Interest),
            20
        );
    }

    #[test]
    fn test_overall_score_is_rounded_mean() {
        let wiscar = WiscarScores {
            will: 100,
            interest: 100,
            skill: 100,
            cognitive: 100,
            ability: 20,
            real_world: 0,
        };
        assert_eq!(wiscar.mean(), 70.0);
        assert_eq!(overall_score(80, 60, &wiscar), 70);

        let low = WiscarScores::default();
        // (20 + 20 + 0) / 3 = 13.33 -> 13
        assert_eq!(overall_score(20, 20, &low), 13);
    }

    #[test]
    fn test_compute_result_empty_responses() {
        let questions = vec![likert_question("p1", Section::Psychometric, "interest")];
        let result = compute_result(&questions, &HashMap::new());

        assert_eq!(result.overall_score, 0);
        assert_eq!(result.recommendation, Recommendation::No);
        assert!(result.career_matches.is_empty());
        assert_eq!(result.next_steps.len(), 5);
        assert!(result.user_id.starts_with("user-"));
    }

    #[test]
    fn test_result_serializes_with_display_field_names() {
        let questions = vec![likert_question("p1", Section::Psychometric, "interest")];
        let mut responses = HashMap::new();
        respond(&mut responses, "p1", 5);

        let result = compute_result(&questions, &responses);
        let json = result.to_json().unwrap();

        assert!(json.contains("\"psychometricScore\":100"));
        assert!(json.contains("\"technicalScore\":0"));
        assert!(json.contains("\"wiscarScores\""));
        assert!(json.contains("\"realWorld\""));
        assert!(json.contains("\"recommendation\":\"no\""));
        assert!(json.contains("\"completedAt\""));
    }
}

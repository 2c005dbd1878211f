//! Progress Tracker Module
//!
//! Holds the running state of one assessment attempt: the ordered question
//! sequence, the cursor into it, the recorded responses, and the completed
//! result. State transitions are reducer-style methods on an owned struct;
//! there is no ambient or shared state, no I/O, and no concurrency.

use crate::catalog;
use crate::scoring::{self, AssessmentResult};
use crate::types::{Question, Response, Section};
use std::collections::HashMap;

/// Mutable state for a single assessment attempt.
#[derive(Clone, Debug)]
pub struct AssessmentProgress {
    questions: Vec<Question>,
    current_index: usize,
    current_section: Option<Section>,
    responses: HashMap<String, Response>,
    result: Option<AssessmentResult>,
}

impl AssessmentProgress {
    /// Starts a fresh attempt over the given catalog, positioned at the
    /// first question.
    pub fn new(questions: Vec<Question>) -> Self {
        let current_section = questions.first().map(|q| q.section);
        Self {
            questions,
            current_index: 0,
            current_section,
            responses: HashMap::new(),
            result: None,
        }
    }

    /// Records an answer for `question_id` and advances the cursor.
    ///
    /// Last answer wins: re-answering a question replaces its prior response
    /// without consuming an extra position. The cursor advance is clamped to
    /// the final index, and the active section marker follows the question
    /// the cursor lands on. Value-range validity is a precondition upheld by
    /// the presentation layer, not re-checked here.
    pub fn record_answer(&mut self, question_id: &str, value: u32) {
        self.responses
            .insert(question_id.to_string(), Response::new(question_id, value));

        if !self.questions.is_empty() {
            self.current_index = (self.current_index + 1).min(self.questions.len() - 1);
            if let Some(question) = self.questions.get(self.current_index) {
                self.current_section = Some(question.section);
            }
        }

        log::debug!(
            "[TRACKER] answer recorded: question={} value={} next_index={} answered={}/{}",
            question_id,
            value,
            self.current_index,
            self.responses.len(),
            self.questions.len()
        );
    }

    /// The question under the cursor, or `None` for an empty catalog.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_at_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len() - 1
    }

    /// Computes and stores the result for the recorded responses. A second
    /// call leaves the stored result untouched.
    pub fn complete(&mut self) {
        if self.result.is_some() {
            return;
        }
        let result = scoring::compute_result(&self.questions, &self.responses);
        log::info!(
            "[TRACKER] assessment completed: overall={} recommendation={}",
            result.overall_score,
            result.recommendation.as_str()
        );
        self.result = Some(result);
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Discards all responses and the result and rewinds to the first
    /// question. Nothing carries over into the fresh attempt.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.current_index = 0;
        self.current_section = self.questions.first().map(|q| q.section);
        self.result = None;
        log::debug!("[TRACKER] attempt reset");
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_section(&self) -> Option<Section> {
        self.current_section
    }

    pub fn responses(&self) -> &HashMap<String, Response> {
        &self.responses
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

impl Default for AssessmentProgress {
    /// An attempt over the built-in IIoT catalog.
    fn default() -> Self {
        Self::new(catalog::builtin_questions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;

    fn two_section_catalog() -> Vec<Question> {
        vec![
            Question {
                id: "p1".to_string(),
                section: Section::Psychometric,
                subsection: "interest".to_string(),
                kind: QuestionKind::RatingScale,
                prompt: "First".to_string(),
                options: None,
                weight: 1,
                category: "test".to_string(),
            },
            Question {
                id: "t1".to_string(),
                section: Section::Technical,
                subsection: "prerequisites".to_string(),
                kind: QuestionKind::RatingScale,
                prompt: "Second".to_string(),
                options: None,
                weight: 1,
                category: "test".to_string(),
            },
        ]
    }

    #[test]
    fn test_new_attempt_starts_at_first_question() {
        let progress = AssessmentProgress::new(two_section_catalog());
        assert_eq!(progress.current_index(), 0);
        assert_eq!(progress.current_question().map(|q| q.id.as_str()), Some("p1"));
        assert_eq!(progress.current_section(), Some(Section::Psychometric));
        assert_eq!(progress.answered_count(), 0);
        assert!(!progress.is_completed());
    }

    #[test]
    fn test_record_answer_advances_and_tracks_section() {
        let mut progress = AssessmentProgress::new(two_section_catalog());
        progress.record_answer("p1", 4);

        assert_eq!(progress.current_index(), 1);
        assert_eq!(progress.current_section(), Some(Section::Technical));
        assert!(progress.is_at_last_question());
    }

    #[test]
    fn test_cursor_clamps_at_final_index() {
        let mut progress = AssessmentProgress::new(two_section_catalog());
        progress.record_answer("p1", 4);
        progress.record_answer("t1", 3);
        progress.record_answer("t1", 2);

        assert_eq!(progress.current_index(), 1);
        assert!(progress.is_at_last_question());
        // Section marker retains the last question's section at the end.
        assert_eq!(progress.current_section(), Some(Section::Technical));
    }

    #[test]
    fn test_reanswer_replaces_prior_response() {
        let mut progress = AssessmentProgress::new(two_section_catalog());
        progress.record_answer("p1", 2);
        progress.record_answer("p1", 5);

        assert_eq!(progress.answered_count(), 1);
        assert_eq!(progress.responses().get("p1").map(|r| r.value), Some(5));
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut progress = AssessmentProgress::new(two_section_catalog());
        progress.record_answer("p1", 5);
        progress.record_answer("t1", 5);

        progress.complete();
        let first = progress.result().cloned();
        progress.complete();

        assert!(progress.is_completed());
        assert_eq!(progress.result().cloned(), first);
    }

    #[test]
    fn test_reset_restores_fresh_attempt() {
        let mut progress = AssessmentProgress::new(two_section_catalog());
        progress.record_answer("p1", 5);
        progress.record_answer("t1", 5);
        progress.complete();

        progress.reset();

        assert_eq!(progress.current_index(), 0);
        assert_eq!(progress.current_question().map(|q| q.id.as_str()), Some("p1"));
        assert_eq!(progress.current_section(), Some(Section::Psychometric));
        assert_eq!(progress.answered_count(), 0);
        assert!(!progress.is_completed());
        assert!(progress.result().is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let mut progress = AssessmentProgress::new(Vec::new());
        assert!(progress.current_question().is_none());
        assert!(!progress.is_at_last_question());
        assert_eq!(progress.current_section(), None);

        // Recording against an empty catalog keeps the cursor parked.
        progress.record_answer("ghost", 3);
        assert_eq!(progress.current_index(), 0);
        assert!(progress.current_question().is_none());
    }

    #[test]
    fn test_default_uses_builtin_catalog() {
        let progress = AssessmentProgress::default();
        assert_eq!(progress.total_questions(), 16);
        assert_eq!(progress.current_section(), Some(Section::Psychometric));
    }
}

use crate::config::constants::DEFAULT_LANGUAGE;

/// One snippet to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
    pub question: Option<String>,
}

impl AnalysisRequest {
    /// Empty questions count as absent.
    pub fn new(code: Option<String>, language: Option<String>, question: Option<String>) -> Self {
        Self {
            code: code.unwrap_or_default(),
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            question: question.filter(|q| !q.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let request = AnalysisRequest::new(None, None, None);

        assert_eq!(request.code, "");
        assert_eq!(request.language, "python");
        assert_eq!(request.question, None);
    }

    #[test]
    fn empty_question_is_dropped() {
        let request = AnalysisRequest::new(Some("x = 1".into()), Some("ruby".into()), Some(String::new()));

        assert_eq!(request.language, "ruby");
        assert_eq!(request.question, None);
    }

    #[test]
    fn explicit_empty_language_is_kept() {
        let request = AnalysisRequest::new(None, Some(String::new()), Some("why?".into()));

        assert_eq!(request.language, "");
        assert_eq!(request.question.as_deref(), Some("why?"));
    }
}

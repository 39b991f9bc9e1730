pub fn generate_suggestions_prompt(code: &str, language: &str) -> String {
    format!(
        "You are a code review assistant. Given the following {language} code, suggest improvements for readability, maintainability, and best practices. \
         Only return actionable suggestions as a list.\n\nCode:\n{code}"
    )
}

pub fn generate_question_prompt(code: &str, language: &str, question: &str) -> String {
    format!(
        "You are a code review assistant. The user has a question about their {language} code.\n\nCode:\n{code}\n\nQuestion: {question}\n\nAnswer:"
    )
}

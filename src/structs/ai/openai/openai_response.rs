use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAIResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|choice| choice.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_choice_content() {
        let body = r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"- Use snake_case"},"finish_reason":"stop"}]}"#;
        let response: OpenAIResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.first_content(), Some("- Use snake_case"));
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn missing_or_null_content_is_none() {
        let empty: OpenAIResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let null: OpenAIResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#).unwrap();

        assert_eq!(empty.first_content(), None);
        assert_eq!(null.first_content(), None);
    }
}

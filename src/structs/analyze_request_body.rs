use serde::{Deserialize, Deserializer, Serialize};
use crate::config::constants::NULL_LANGUAGE;
use crate::structs::analysis_request::AnalysisRequest;

/// JSON body accepted by `POST /analyze`.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AnalyzeRequestBody {
    #[serde(default)]
    pub code: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub language: Option<Option<String>>,
    #[serde(default)]
    pub prompt: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<AnalyzeRequestBody> for AnalysisRequest {
    fn from(body: AnalyzeRequestBody) -> Self {
        let language = body
            .language
            .map(|language| language.unwrap_or_else(|| NULL_LANGUAGE.to_string()));
        AnalysisRequest::new(body.code, language, body.prompt)
    }
}

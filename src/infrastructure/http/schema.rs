// SPDX-License-Identifier: MPL-2.0
//! Response schema of the analyze-image endpoint.
//!
//! The body is decoded into a typed struct (unknown fields are ignored) and
//! then checked before it is allowed to become an [`ImageAnalysis`].

use crate::application::port::AnalyzeError;
use crate::domain::gallery::ImageAnalysis;
use serde::Deserialize;

/// Raw JSON body: `{ title, prompt, format, keywords: [string] }`.
#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    title: String,
    prompt: String,
    format: String,
    keywords: Vec<String>,
}

impl AnalysisResponse {
    fn validate(self) -> Result<ImageAnalysis, AnalyzeError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AnalyzeError::InvalidResponse("title is empty".to_string()));
        }
        let keywords = self
            .keywords
            .into_iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Ok(ImageAnalysis {
            title,
            prompt: self.prompt.trim().to_string(),
            format: self.format.trim().to_string(),
            keywords,
        })
    }
}

/// Decodes and validates a response body.
pub fn parse_analysis(body: &[u8]) -> Result<ImageAnalysis, AnalyzeError> {
    let response: AnalysisResponse = serde_json::from_slice(body)
        .map_err(|e| AnalyzeError::InvalidResponse(e.to_string()))?;
    response.validate()
}

//! Keyword market intelligence.

use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::job::AiJob;
use crate::model::GenerativeModel;
use crate::parser::parse_json;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPoint {
    pub month: String,
    /// Relative search interest, 0..=100.
    pub searches: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSearch {
    pub query: String,
    pub category: String,
    pub demand: DemandLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    /// Model confidence, 0..=100.
    pub confidence: f64,
    pub summary: String,
    #[serde(default)]
    pub insights: Vec<String>,
    pub potential_impact: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDemand {
    pub category: String,
    pub level: DemandLevel,
    pub percentage: f64,
}

/// Market commentary for one search keyword, as returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub is_trending: bool,
    pub trend_direction: TrendDirection,
    #[serde(default)]
    pub interest_over_time: Vec<InterestPoint>,
    #[serde(default)]
    pub related_searches: Vec<RelatedSearch>,
    pub ai_recommendation: AiRecommendation,
    #[serde(default)]
    pub category_demand: Vec<CategoryDemand>,
}

impl KeywordAnalysis {
    fn validate(&self) -> Result<(), AiError> {
        if self.keyword.trim().is_empty() {
            return Err(AiError::InvalidResponse("keyword is empty".to_string()));
        }

        let confidence = self.ai_recommendation.confidence;
        if !(0.0..=100.0).contains(&confidence) {
            return Err(AiError::InvalidResponse(format!(
                "confidence {confidence} is outside 0..=100"
            )));
        }

        if let Some(point) = self
            .interest_over_time
            .iter()
            .find(|p| !(0.0..=100.0).contains(&p.searches))
        {
            return Err(AiError::InvalidResponse(format!(
                "search interest {} for {} is outside 0..=100",
                point.searches, point.month
            )));
        }

        if let Some(demand) = self
            .category_demand
            .iter()
            .find(|c| !(0.0..=100.0).contains(&c.percentage))
        {
            return Err(AiError::InvalidResponse(format!(
                "category demand {} for {} is outside 0..=100",
                demand.percentage, demand.category
            )));
        }

        Ok(())
    }
}

/// Prompt asking the model for a [`KeywordAnalysis`] document.
pub fn keyword_prompt(keyword: &str) -> String {
    format!(
        r#"You are a market intelligence analyst specializing in the jewelry industry. Analyze the keyword "{keyword}" and provide market insights.

Respond ONLY with valid JSON. Do not include markdown formatting, code blocks, or explanatory text.

Use exactly this structure:
{{
  "keyword": "{keyword}",
  "isTrending": boolean,
  "trendDirection": "up" | "down" | "stable",
  "interestOverTime": [{{"month": "Month Year", "searches": number 0-100}}],
  "relatedSearches": [{{"query": string, "category": string, "demand": "Low" | "Medium" | "High" | "Very High"}}],
  "aiRecommendation": {{
    "confidence": number 0-100,
    "summary": string,
    "insights": [string],
    "potentialImpact": "Low" | "Medium" | "High"
  }},
  "categoryDemand": [{{"category": string, "level": "Low" | "Medium" | "High" | "Very High", "percentage": number 0-100}}]
}}

Provide 12 months of interestOverTime ending with the current month, 5-7 relatedSearches, 3-4 insights and 3-4 categoryDemand entries. Keep the data realistic for the jewelry market, including seasonal variation."#
    )
}

/// Parse and validate a model reply to [`keyword_prompt`].
pub fn parse_keyword_response(reply: &str) -> Result<KeywordAnalysis, AiError> {
    let analysis: KeywordAnalysis = parse_json(reply)?;
    analysis.validate()?;
    Ok(analysis)
}

/// Job: ask `model` for a keyword analysis.
pub struct KeywordAnalysisJob<M> {
    keyword: String,
    model: M,
}

impl<M: GenerativeModel> KeywordAnalysisJob<M> {
    pub fn new(keyword: impl Into<String>, model: M) -> Self {
        Self {
            keyword: keyword.into(),
            model,
        }
    }
}

impl<M: GenerativeModel> AiJob for KeywordAnalysisJob<M> {
    type Input = String;
    type Output = KeywordAnalysis;

    fn input(&self) -> &Self::Input {
        &self.keyword
    }

    fn run(&self) -> Result<KeywordAnalysis, AiError> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(AiError::InvalidInput("keyword cannot be empty".to_string()));
        }

        tracing::info!(keyword, "requesting keyword analysis");
        let reply = self.model.generate(&keyword_prompt(keyword))?;

        let analysis = parse_keyword_response(&reply).inspect_err(|e| {
            tracing::warn!(keyword, error = %e, "discarding keyword analysis reply");
        })?;

        tracing::debug!(
            keyword,
            trending = analysis.is_trending,
            related = analysis.related_searches.len(),
            "keyword analysis accepted"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const REPLY: &str = r#"{
        "keyword": "gold chain",
        "isTrending": true,
        "trendDirection": "up",
        "interestOverTime": [
            {"month": "Nov 2025", "searches": 61},
            {"month": "Dec 2025", "searches": 78}
        ],
        "relatedSearches": [
            {"query": "22kt gold chain price", "category": "Chains", "demand": "Very High"}
        ],
        "aiRecommendation": {
            "confidence": 88,
            "summary": "Demand is climbing into the wedding season.",
            "insights": ["Stock lightweight 22K chains"],
            "potentialImpact": "High"
        },
        "categoryDemand": [
            {"category": "Gold Jewelry", "level": "High", "percentage": 72}
        ]
    }"#;

    struct Canned {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl GenerativeModel for Canned {
        fn generate(&self, prompt: &str) -> Result<String, AiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn parses_full_reply() {
        let analysis = parse_keyword_response(REPLY).unwrap();
        assert_eq!(analysis.keyword, "gold chain");
        assert!(analysis.is_trending);
        assert_eq!(analysis.trend_direction, TrendDirection::Up);
        assert_eq!(analysis.related_searches[0].demand, DemandLevel::VeryHigh);
        assert_eq!(analysis.ai_recommendation.potential_impact, ImpactLevel::High);
        assert_eq!(analysis.category_demand[0].percentage, 72.0);
    }

    #[test]
    fn fenced_reply_is_accepted() {
        let fenced = format!("```json\n{REPLY}\n```");
        assert_eq!(parse_keyword_response(&fenced).unwrap().keyword, "gold chain");
    }

    #[test]
    fn non_boolean_trending_flag_is_rejected() {
        let reply = REPLY.replace("\"isTrending\": true", "\"isTrending\": \"yes\"");
        assert!(matches!(
            parse_keyword_response(&reply),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let reply = REPLY.replace("\"keyword\": \"gold chain\"", "\"keyword\": \"\"");
        let err = parse_keyword_response(&reply).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(msg) if msg.contains("keyword")));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let reply = REPLY.replace("\"confidence\": 88", "\"confidence\": 140");
        let err = parse_keyword_response(&reply).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(msg) if msg.contains("confidence")));
    }

    #[test]
    fn prompt_embeds_keyword() {
        let prompt = keyword_prompt("diamond studs");
        assert!(prompt.contains("Analyze the keyword \"diamond studs\""));
        assert!(prompt.contains("\"keyword\": \"diamond studs\""));
    }

    #[test]
    fn job_sends_prompt_and_returns_analysis() {
        let job = KeywordAnalysisJob::new("  gold chain ", Canned::new(REPLY));
        let analysis = job.run().unwrap();
        assert_eq!(analysis.keyword, "gold chain");

        let prompts = job.model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"gold chain\""));
    }

    #[test]
    fn blank_keyword_never_reaches_the_model() {
        let job = KeywordAnalysisJob::new("   ", Canned::new(REPLY));
        assert!(matches!(job.run(), Err(AiError::InvalidInput(_))));
        assert!(job.model.prompts.lock().unwrap().is_empty());
    }
}

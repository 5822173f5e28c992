//! Description generation — the fallback used when the sheet has no match.
//!
//! Flow: reference samples → prompt → LLM call → numbered-list parsing.
//!
//! `AppState` holds an `Arc<dyn DescriptionGenerator>`; the production backend
//! is `LlmDescriptionGenerator`.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM, REFERENCE_HEADER,
};
use crate::llm_client::LlmClient;
use crate::search::reference::MAX_REFERENCES;
use crate::search::JobQuery;

/// Max descriptions kept from a generation response.
pub const MAX_GENERATED: usize = 10;

/// Leading "1. ", "2) ", "3: " enumerators.
static ENUMERATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.):]\s*").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces job descriptions for a query, styled after the reference samples.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(
        &self,
        query: &JobQuery,
        references: &[String],
    ) -> Result<Vec<String>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmDescriptionGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Generator backed by the chat-completion API. One attempt per request.
pub struct LlmDescriptionGenerator {
    llm: LlmClient,
}

impl LlmDescriptionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DescriptionGenerator for LlmDescriptionGenerator {
    async fn generate(
        &self,
        query: &JobQuery,
        references: &[String],
    ) -> Result<Vec<String>, AppError> {
        let prompt = build_user_prompt(query, references);

        let text = self
            .llm
            .complete(GENERATION_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Description generation failed: {e}")))?;

        let descriptions = parse_numbered_list(&text);
        info!(
            "Generated {} descriptions from {} references",
            descriptions.len(),
            references.len()
        );
        Ok(descriptions)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building and response parsing
// ────────────────────────────────────────────────────────────────────────────

/// Fills the generation template. The reference block is omitted when there
/// are no references; at most `MAX_REFERENCES` are listed.
pub fn build_user_prompt(query: &JobQuery, references: &[String]) -> String {
    let mut reference_block = String::new();
    if !references.is_empty() {
        reference_block.push_str(REFERENCE_HEADER);
        for (i, sample) in references.iter().take(MAX_REFERENCES).enumerate() {
            reference_block.push_str(&format!("{}. {}\n", i + 1, sample));
        }
    }

    GENERATION_PROMPT_TEMPLATE
        .replace("{position}", &query.position)
        .replace("{industry}", &query.industry)
        .replace("{department}", &query.department)
        .replace("{reference_block}", &reference_block)
}

/// Turns a numbered-list reply into plain lines.
///
/// Blank lines and `#` headings are dropped, enumerators are stripped, and
/// at most `MAX_GENERATED` lines are kept. No line count is enforced.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| ENUMERATOR_RE.replace(line, "").into_owned())
        .filter(|line| !line.is_empty())
        .take(MAX_GENERATED)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::serve_once;

    fn generator_for(url: String) -> LlmDescriptionGenerator {
        let llm = LlmClient::new("test-key".to_string()).unwrap().with_url(url);
        LlmDescriptionGenerator::new(llm)
    }

    #[tokio::test]
    async fn test_generate_parses_llm_reply() {
        let url = serve_once(
            200,
            r#"{"choices": [{"message": {"content": "1. 予算管理を行う\n2) 人員配置を図る"}}]}"#,
        )
        .await;
        let lines = generator_for(url).generate(&query(), &[]).await.unwrap();
        assert_eq!(lines, vec!["予算管理を行う", "人員配置を図る"]);
    }

    #[tokio::test]
    async fn test_generate_empty_reply_degrades_to_empty_list() {
        let url = serve_once(200, r#"{"choices": [{"message": {"content": ""}}]}"#).await;
        let lines = generator_for(url).generate(&query(), &[]).await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_generate_whitespace_reply_degrades_to_empty_list() {
        let url = serve_once(200, r#"{"choices": [{"message": {"content": "  \n "}}]}"#).await;
        let lines = generator_for(url).generate(&query(), &[]).await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_generate_null_content_is_llm_error() {
        let url = serve_once(200, r#"{"choices": [{"message": {"content": null}}]}"#).await;
        let err = generator_for(url).generate(&query(), &[]).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("empty content"));
    }

    #[tokio::test]
    async fn test_generate_api_failure_is_llm_error() {
        let url = serve_once(500, r#"{"error": {"message": "server overloaded"}}"#).await;
        let err = generator_for(url).generate(&query(), &[]).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("server overloaded"));
    }

    #[test]
    fn test_parse_empty_reply_is_empty() {
        assert!(parse_numbered_list("").is_empty());
    }

    fn query() -> JobQuery {
        JobQuery {
            position: "マネージャー".to_string(),
            industry: "製薬".to_string(),
            department: "営業".to_string(),
        }
    }

    #[test]
    fn test_parse_strips_each_enumerator_style() {
        let text = "1. 予算管理を行う\n2) 取引先との交渉を担当\n3: 営業戦略の立案に関与";
        assert_eq!(
            parse_numbered_list(text),
            vec!["予算管理を行う", "取引先との交渉を担当", "営業戦略の立案に関与"]
        );
    }

    #[test]
    fn test_parse_paren_enumerator() {
        assert_eq!(
            parse_numbered_list("3) Managed vendor contracts."),
            vec!["Managed vendor contracts."]
        );
    }

    #[test]
    fn test_parse_drops_headings_and_blank_lines() {
        let text = "## 職務内容\n\n1. 予算管理を行う\n   \n# 補足\n2. 人員配置を図る\n";
        assert_eq!(
            parse_numbered_list(text),
            vec!["予算管理を行う", "人員配置を図る"]
        );
    }

    #[test]
    fn test_parse_keeps_unnumbered_lines() {
        assert_eq!(
            parse_numbered_list("以下が職務内容です。\n1. 予算管理を行う"),
            vec!["以下が職務内容です。", "予算管理を行う"]
        );
    }

    #[test]
    fn test_parse_drops_bare_enumerators() {
        assert_eq!(parse_numbered_list("1.\n2. 人員配置を図る"), vec!["人員配置を図る"]);
    }

    #[test]
    fn test_parse_caps_at_ten() {
        let text: String = (1..=14).map(|i| format!("{i}. 業務{i}\n")).collect();
        let parsed = parse_numbered_list(&text);
        assert_eq!(parsed.len(), MAX_GENERATED);
        assert_eq!(parsed[0], "業務1");
        assert_eq!(parsed[9], "業務10");
    }

    #[test]
    fn test_parse_handles_crlf() {
        assert_eq!(
            parse_numbered_list("1. 予算管理を行う\r\n2. 人員配置を図る\r\n"),
            vec!["予算管理を行う", "人員配置を図る"]
        );
    }

    #[test]
    fn test_parse_malformed_reply_degrades_to_empty() {
        assert!(parse_numbered_list("\n\n# \n").is_empty());
    }

    #[test]
    fn test_prompt_includes_query_fields() {
        let prompt = build_user_prompt(&query(), &[]);
        assert!(prompt.contains("- ポジション:マネージャー"));
        assert!(prompt.contains("- 業界:製薬"));
        assert!(prompt.contains("- 部門:営業"));
        assert!(!prompt.contains("【参考サンプル】"));
        assert!(!prompt.contains("{reference_block}"));
    }

    #[test]
    fn test_prompt_lists_at_most_five_references() {
        let references: Vec<String> = (1..=7).map(|i| format!("参考{i}")).collect();
        let prompt = build_user_prompt(&query(), &references);
        assert!(prompt.contains("【参考サンプル】"));
        assert!(prompt.contains("1. 参考1\n"));
        assert!(prompt.contains("5. 参考5\n"));
        assert!(!prompt.contains("参考6"));
    }
}

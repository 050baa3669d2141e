//! The fixed digest prompt and the Messages API request body.

use serde_json::{Value, json};

/// Output-token ceiling for a single digest request.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Server-side tool type identifier for Anthropic web search.
pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";

/// Prompt sent on every invocation. The model does its own web searching;
/// nothing here is interpolated at runtime.
pub const DIGEST_PROMPT: &str = "\
Find 5 interesting articles from the past 24 hours about:
- AI/ML research papers or breakthroughs
- AI startup news or funding
- New AI tools or products
- How big tech companies (Google, Meta, Amazon, Microsoft, OpenAI, Anthropic) are handling AI
- Interesting software engineering news related to AI
For each article, provide:
1. A one-line headline summary (what it's about)
2. The source URL
3. Why it's interesting (1 sentence)
Format each as:
**[Headline]**
Source: [URL]
Why: [One sentence]
---
";

/// Build the JSON body for a Messages API digest request.
///
/// The web-search tool is declared but never orchestrated locally; the
/// service invokes it zero or more times on its own during generation.
#[must_use]
pub fn build_request_body(model: &str) -> Value {
    json!({
        "model": model,
        "max_tokens": MAX_OUTPUT_TOKENS,
        "tools": [{
            "type": WEB_SEARCH_TOOL_TYPE,
            "name": "web_search"
        }],
        "messages": [{
            "role": "user",
            "content": DIGEST_PROMPT
        }]
    })
}

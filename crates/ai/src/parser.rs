//! JSON extraction from model replies.
//!
//! Models asked for "JSON only" still wrap replies in Markdown fences or add a
//! sentence of preamble. Extraction tries, in order: the whole reply, the body
//! of a fenced block, then the first complete JSON object in the text.

use serde::de::DeserializeOwned;

use crate::error::AiError;

pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, AiError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AiError::InvalidResponse("empty reply".to_string()));
    }

    let direct = serde_json::from_str::<T>(trimmed);
    let first_error = match direct {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    let fallbacks = [strip_code_fence(trimmed), first_json_object(trimmed)];
    for candidate in fallbacks.into_iter().flatten() {
        if let Ok(parsed) = serde_json::from_str::<T>(candidate) {
            return Ok(parsed);
        }
    }

    Err(AiError::InvalidResponse(format!(
        "reply is not the expected JSON: {first_error}"
    )))
}

/// Body of the first ``` fenced block, with any language tag dropped.
pub fn strip_code_fence(content: &str) -> Option<&str> {
    let start = content.find("```")?;
    let after_open = &content[start + 3..];
    let body_start = after_open.find('\n').map_or(0, |i| i + 1);
    let body = &after_open[body_start..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

fn first_json_object(content: &str) -> Option<&str> {
    for (idx, ch) in content.char_indices() {
        if ch != '{' {
            continue;
        }
        let candidate = &content[idx..];
        let mut stream =
            serde_json::Deserializer::from_str(candidate).into_iter::<serde_json::Value>();
        if let Some(Ok(_)) = stream.next() {
            return Some(&candidate[..stream.byte_offset()]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        ok: bool,
    }

    #[test]
    fn plain_json_parses() {
        assert_eq!(parse_json::<Probe>(" {\"ok\": true} ").unwrap(), Probe { ok: true });
    }

    #[test]
    fn fenced_json_parses() {
        let reply = "```json\n{\"ok\": true}\n```";
        assert_eq!(parse_json::<Probe>(reply).unwrap(), Probe { ok: true });
    }

    #[test]
    fn fence_without_language_tag_parses() {
        let reply = "```\n{\"ok\": false}\n```";
        assert_eq!(parse_json::<Probe>(reply).unwrap(), Probe { ok: false });
    }

    #[test]
    fn preamble_is_skipped() {
        let reply = "Here is the analysis: {\"ok\": true} Hope this helps!";
        assert_eq!(parse_json::<Probe>(reply).unwrap(), Probe { ok: true });
    }

    #[test]
    fn prose_only_reply_is_rejected() {
        let err = parse_json::<Probe>("I cannot help with that.").unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }

    #[test]
    fn empty_reply_is_rejected() {
        assert!(matches!(parse_json::<Probe>("   "), Err(AiError::InvalidResponse(_))));
    }
}

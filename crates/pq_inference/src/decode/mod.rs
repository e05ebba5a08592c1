use pq_core::{Analysis, Error, Framing, Result};
use serde::de::DeserializeOwned;

/// Decodes the model's answer to the analysis prompt.
///
/// The text must be a JSON object with exactly the keys the prompt asks
/// for, optionally wrapped in a Markdown code fence. Unknown enum values,
/// out-of-range scores or a summary that is not three entries long are
/// rejected with [`Error::Decode`].
pub fn decode_analysis(text: &str) -> Result<Analysis> {
    let analysis: Analysis = decode_json(text, "analysis")?;
    analysis.validate()?;
    Ok(analysis)
}

/// Decodes the model's answer to the comparison prompt.
pub fn decode_framing(text: &str) -> Result<Framing> {
    let framing: Framing = decode_json(text, "comparison")?;
    framing.validate()?;
    Ok(framing)
}

fn decode_json<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(Error::Decode(format!("{} response is empty", what)));
    }
    serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("{} response does not match the schema: {}", what, e)))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest
                .strip_prefix("json")
                .or_else(|| rest.strip_prefix("JSON"))
                .unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_core::{PoliticalLeaning, Tone};

    const ANALYSIS: &str = r#"{
        "politicalLeaning": "conservative",
        "tone": "emotionally-charged",
        "summary": ["Tax cuts proposed", "Deficit concerns raised", "Vote expected Friday"],
        "opposingFraming": "Critics call it a giveaway to the wealthy.",
        "sentiment": -0.4,
        "factualScore": 0.7,
        "biasScore": 0.6
    }"#;

    #[test]
    fn test_decode_analysis() {
        let analysis = decode_analysis(ANALYSIS).unwrap();
        assert_eq!(analysis.political_leaning, PoliticalLeaning::Conservative);
        assert_eq!(analysis.tone, Tone::EmotionallyCharged);
        assert_eq!(analysis.summary[2], "Vote expected Friday");
        assert_eq!(analysis.bias_score, 0.6);
    }

    #[test]
    fn test_decode_fenced_analysis() {
        let fenced = format!("```json\n{}\n```", ANALYSIS);
        assert!(decode_analysis(&fenced).is_ok());

        let bare_fence = format!("```\n{}\n```", ANALYSIS);
        assert!(decode_analysis(&bare_fence).is_ok());
    }

    #[test]
    fn test_reject_invalid_analysis() {
        let unknown_leaning = ANALYSIS.replace("conservative", "libertarian");
        assert!(matches!(decode_analysis(&unknown_leaning), Err(Error::Decode(_))));

        let out_of_range = ANALYSIS.replace("0.6\n", "1.6\n");
        let err = decode_analysis(&out_of_range).unwrap_err();
        assert!(err.to_string().contains("biasScore"));

        let two_points = ANALYSIS.replace(", \"Vote expected Friday\"", "");
        assert!(decode_analysis(&two_points).is_err());

        let missing_field = ANALYSIS.replace("\"sentiment\": -0.4,", "");
        assert!(decode_analysis(&missing_field).is_err());

        assert!(decode_analysis("Here is my analysis: the article is biased.").is_err());
        assert!(decode_analysis("   ").is_err());
    }

    #[test]
    fn test_decode_framing() {
        let text = r#"{
            "framingDifferences": ["One stresses jobs, the other costs"],
            "keyFactEmphasis": ["Unemployment figures", "Budget projections"],
            "languageContrasts": ["'reform' versus 'overhaul'"],
            "verdict": "Both cover the bill but pick different stakes."
        }"#;
        let framing = decode_framing(text).unwrap();
        assert_eq!(framing.key_fact_emphasis.len(), 2);

        let no_verdict = text.replace("Both cover the bill but pick different stakes.", " ");
        assert!(decode_framing(&no_verdict).is_err());

        let missing_list = r#"{"framingDifferences": [], "keyFactEmphasis": [], "verdict": "x"}"#;
        assert!(decode_framing(missing_list).is_err());
    }
}

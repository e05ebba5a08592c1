use pq_core::Article;

pub fn analysis_prompt(article: &Article) -> String {
    format!(
        r#"Analyze the following news article for political bias and tone:

Title: {title}
Description: {description}
Source: {source}

Please provide:
1. Political leaning (liberal, conservative, or centrist)
2. Tone (neutral, biased, or emotionally-charged)
3. Three bullet points summarizing the article
4. One sentence showing how the opposing ideology might frame this story
5. Sentiment score from -1 (very negative) to 1 (very positive)
6. Factual score from 0 (opinion-heavy) to 1 (fact-based)
7. Bias score from -1 (liberal bias) to 1 (conservative bias)

Format your response as JSON with these exact keys:
{{
  "politicalLeaning": "liberal|conservative|centrist",
  "tone": "neutral|biased|emotionally-charged",
  "summary": ["point1", "point2", "point3"],
  "opposingFraming": "opposing viewpoint sentence",
  "sentiment": 0.5,
  "factualScore": 0.8,
  "biasScore": -0.2
}}"#,
        title = article.title,
        description = article.description,
        source = article.source.name,
    )
}

pub fn comparison_prompt(first: &Article, second: &Article) -> String {
    format!(
        r#"Compare these two news articles about the same topic:

Article 1:
Title: {title1}
Description: {description1}
Source: {source1}

Article 2:
Title: {title2}
Description: {description2}
Source: {source2}

Please provide:
1. Key framing differences between the articles
2. How each article emphasizes different facts
3. Language and tone contrasts
4. Overall framing verdict comparing their approaches

Format as JSON:
{{
  "framingDifferences": ["difference1", "difference2"],
  "keyFactEmphasis": ["emphasis1", "emphasis2"],
  "languageContrasts": ["contrast1", "contrast2"],
  "verdict": "overall comparison summary"
}}"#,
        title1 = first.title,
        description1 = first.description,
        source1 = first.source.name,
        title2 = second.title,
        description2 = second.description,
        source2 = second.source.name,
    )
}

use pq_core::{Analysis, Article, PoliticalLeaning, Tone, VisualizationPoint};
use rand::seq::SliceRandom;
use rand::Rng;

pub const SOURCE_PALETTE: [&str; 5] = ["#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6"];

/// Fallback for values without an assigned color.
pub const NEUTRAL_GRAY: &str = "#6B7280";

/// Places articles on the bias map.
pub trait PointStrategy: Send + Sync {
    fn point_for(&self, article: &Article) -> VisualizationPoint;
}

/// Uniformly random placement with a synthetic analysis per point.
///
/// The embedded analysis is independent of whatever analysis the article
/// later receives; the two are never reconciled.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlacement;

impl PointStrategy for RandomPlacement {
    fn point_for(&self, article: &Article) -> VisualizationPoint {
        let mut rng = rand::thread_rng();
        let analysis = Analysis {
            political_leaning: *PoliticalLeaning::ALL
                .choose(&mut rng)
                .unwrap_or(&PoliticalLeaning::Centrist),
            tone: *Tone::ALL.choose(&mut rng).unwrap_or(&Tone::Neutral),
            summary: vec![
                "Key points discussed".to_string(),
                "Multiple perspectives presented".to_string(),
                "Policy implications analyzed".to_string(),
            ],
            opposing_framing: "Alternative viewpoint could emphasize different aspects.".to_string(),
            sentiment: rng.gen_range(-1.0..1.0),
            factual_score: rng.gen_range(0.6..1.0),
            bias_score: rng.gen_range(-1.0..1.0),
        };

        VisualizationPoint {
            id: article.id.clone(),
            title: article.title.clone(),
            x: rng.gen_range(-1.0..1.0),
            y: rng.gen_range(0.0..1.0),
            source: article.source.name.clone(),
            color: source_color(&article.source.name).to_string(),
            analysis,
        }
    }
}

/// Stable palette color for a source name.
pub fn source_color(name: &str) -> &'static str {
    let hash = name.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    SOURCE_PALETTE[hash.unsigned_abs() as usize % SOURCE_PALETTE.len()]
}

pub fn leaning_color(leaning: PoliticalLeaning) -> &'static str {
    match leaning {
        PoliticalLeaning::Liberal => "#3B82F6",
        PoliticalLeaning::Conservative => "#EF4444",
        PoliticalLeaning::Centrist => "#10B981",
    }
}

pub fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => NEUTRAL_GRAY,
        Tone::Biased => "#F59E0B",
        Tone::EmotionallyCharged => "#EF4444",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::article;

    #[test]
    fn test_source_color() {
        assert_eq!(source_color(""), "#3B82F6");
        assert_eq!(source_color("A"), "#3B82F6");
        assert_eq!(source_color("B"), "#EF4444");
        assert_eq!(source_color("CNN"), "#F59E0B");

        for name in ["Reuters", "BBC News", "Fox News", "Wall Street Journal", "Le Monde à l'été"] {
            let color = source_color(name);
            assert_eq!(color, source_color(name));
            assert!(SOURCE_PALETTE.contains(&color));
        }
    }

    #[test]
    fn test_long_names_do_not_overflow() {
        let name = "Associated Press ".repeat(200);
        assert!(SOURCE_PALETTE.contains(&source_color(&name)));
    }

    #[test]
    fn test_random_placement_domains() {
        let a = article("a", "Senate passes budget", "Reuters");
        for _ in 0..100 {
            let point = RandomPlacement.point_for(&a);
            assert_eq!(point.id, "a");
            assert_eq!(point.title, "Senate passes budget");
            assert_eq!(point.source, "Reuters");
            assert_eq!(point.color, source_color("Reuters"));
            assert!((-1.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
            assert!(point.analysis.validate().is_ok());
            assert_eq!(point.analysis.summary[0], "Key points discussed");
        }
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(leaning_color(PoliticalLeaning::Liberal), "#3B82F6");
        assert_eq!(leaning_color(PoliticalLeaning::Centrist), "#10B981");
        assert_eq!(tone_color(Tone::Neutral), NEUTRAL_GRAY);
        assert_eq!(tone_color(Tone::EmotionallyCharged), "#EF4444");
    }
}

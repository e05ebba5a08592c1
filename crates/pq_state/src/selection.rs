use pq_core::Article;
use serde::Serialize;

/// The zero, one or two articles picked for a side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComparisonSelection(Vec<Article>);

impl ComparisonSelection {
    pub const CAPACITY: usize = 2;

    /// Returns the selection after the user picks `article`.
    ///
    /// A second pick with the same identity as the only selected article is
    /// ignored, so an article can never be compared with itself. Picking
    /// while two are selected starts over with just `article`.
    pub fn select(&self, article: &Article) -> Self {
        match self.0.as_slice() {
            [] => Self(vec![article.clone()]),
            [only] if only.id == article.id => self.clone(),
            [only] => Self(vec![only.clone(), article.clone()]),
            _ => Self(vec![article.clone()]),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn articles(&self) -> &[Article] {
        &self.0
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|a| a.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|a| a.id == id)
    }

    /// Both articles in selection order, once two are selected.
    pub fn pair(&self) -> Option<(&Article, &Article)> {
        match self.0.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::article;

    #[test]
    fn test_select_transitions() {
        let a = article("a", "A", "CNN");
        let b = article("b", "B", "NPR");
        let c = article("c", "C", "BBC News");

        let empty = ComparisonSelection::default();
        let one = empty.select(&a);
        assert_eq!(one.ids(), vec!["a"]);

        let same = one.select(&a);
        assert_eq!(same.ids(), vec!["a"]);

        let two = one.select(&b);
        assert_eq!(two.ids(), vec!["a", "b"]);
        assert!(two.pair().is_some());

        let reset = two.select(&c);
        assert_eq!(reset.ids(), vec!["c"]);
        assert!(reset.len() <= ComparisonSelection::CAPACITY);

        // a third pick of an already selected article also starts over
        let reset = two.select(&a);
        assert_eq!(reset.ids(), vec!["a"]);
    }

    #[test]
    fn test_identity_not_equality() {
        let a = article("a", "A", "CNN");
        let mut edited = a.clone();
        edited.title = "A, updated".to_string();

        let selection = ComparisonSelection::default().select(&a).select(&edited);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.articles()[0].title, "A");
    }

    #[test]
    fn test_pair_requires_two() {
        let a = article("a", "A", "CNN");
        assert!(ComparisonSelection::default().pair().is_none());
        assert!(ComparisonSelection::default().select(&a).pair().is_none());
        assert!(ComparisonSelection::default().select(&a).contains("a"));
    }
}

//! Rating dimensions, the rating set, and per-row star widget state.

use serde::{Deserialize, Serialize};

pub const MAX_STARS: u8 = 5;

/// Which summary group a dimension is averaged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Menu,
    Restaurant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    MenuEase,
    MenuClarity,
    MenuSpeed,
    FoodQuality,
    Ambience,
    Pricing,
    Service,
}

impl RatingDimension {
    pub const ALL: [RatingDimension; 7] = [
        RatingDimension::MenuEase,
        RatingDimension::MenuClarity,
        RatingDimension::MenuSpeed,
        RatingDimension::FoodQuality,
        RatingDimension::Ambience,
        RatingDimension::Pricing,
        RatingDimension::Service,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Key used by the form markup (`data-rating`).
    pub fn key(&self) -> &'static str {
        match self {
            RatingDimension::MenuEase => "menu_ease",
            RatingDimension::MenuClarity => "menu_clarity",
            RatingDimension::MenuSpeed => "menu_speed",
            RatingDimension::FoodQuality => "food_quality",
            RatingDimension::Ambience => "ambience",
            RatingDimension::Pricing => "pricing",
            RatingDimension::Service => "service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingDimension::MenuEase => "Ease of using the menu",
            RatingDimension::MenuClarity => "Clarity of dish information",
            RatingDimension::MenuSpeed => "Menu loading speed",
            RatingDimension::FoodQuality => "Food quality",
            RatingDimension::Ambience => "Ambience",
            RatingDimension::Pricing => "Value for money",
            RatingDimension::Service => "Service",
        }
    }

    pub fn cluster(&self) -> Cluster {
        match self {
            RatingDimension::MenuEase | RatingDimension::MenuClarity | RatingDimension::MenuSpeed => Cluster::Menu,
            _ => Cluster::Restaurant,
        }
    }
}

/// Scores 0..=5 per dimension; 0 means unrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSet {
    scores: [u8; RatingDimension::ALL.len()],
}

impl RatingSet {
    pub fn get(&self, dimension: RatingDimension) -> u8 {
        self.scores[dimension.index()]
    }

    /// Scores above the star count are clamped.
    pub fn set(&mut self, dimension: RatingDimension, score: u8) {
        self.scores[dimension.index()] = score.min(MAX_STARS);
    }

    pub fn with(mut self, dimension: RatingDimension, score: u8) -> Self {
        self.set(dimension, score);
        self
    }

    pub fn is_unrated(&self) -> bool {
        self.scores.iter().all(|&s| s == 0)
    }

    /// Scores of one cluster, in dimension order.
    pub fn cluster_scores(&self, cluster: Cluster) -> Vec<u8> {
        RatingDimension::ALL
            .iter()
            .filter(|d| d.cluster() == cluster)
            .map(|d| self.get(*d))
            .collect()
    }
}

/// One row of stars: the committed score plus an optional hover preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRow {
    committed: u8,
    preview: Option<u8>,
}

impl StarRow {
    pub fn new(committed: u8) -> Self {
        Self {
            committed: committed.min(MAX_STARS),
            preview: None,
        }
    }

    /// Click on the star at 1-based `position`.
    pub fn click(&mut self, position: u8) -> u8 {
        self.committed = position.min(MAX_STARS);
        self.preview = None;
        self.committed
    }

    pub fn hover(&mut self, position: u8) {
        self.preview = Some(position.min(MAX_STARS));
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Number of stars drawn filled.
    pub fn fill(&self) -> u8 {
        self.preview.unwrap_or(self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_dimensions_in_two_clusters() {
        let menu = RatingDimension::ALL.iter().filter(|d| d.cluster() == Cluster::Menu).count();
        assert_eq!(RatingDimension::ALL.len(), 7);
        assert_eq!(menu, 3);
        assert_eq!(RatingDimension::FoodQuality.key(), "food_quality");
    }

    #[test]
    fn test_rating_set_independent_dimensions() {
        let mut ratings = RatingSet::default();
        assert!(ratings.is_unrated());
        ratings.set(RatingDimension::Ambience, 4);
        assert_eq!(ratings.get(RatingDimension::Ambience), 4);
        assert_eq!(ratings.get(RatingDimension::Service), 0);
        assert!(!ratings.is_unrated());
        ratings.set(RatingDimension::Service, 9);
        assert_eq!(ratings.get(RatingDimension::Service), MAX_STARS);
    }

    #[test]
    fn test_cluster_scores() {
        let ratings = RatingSet::default()
            .with(RatingDimension::MenuSpeed, 2)
            .with(RatingDimension::Pricing, 5);
        assert_eq!(ratings.cluster_scores(Cluster::Menu), vec![0, 0, 2]);
        assert_eq!(ratings.cluster_scores(Cluster::Restaurant), vec![0, 0, 5, 0]);
    }

    #[test]
    fn test_star_row_preview_and_commit() {
        let mut row = StarRow::new(2);
        row.hover(4);
        assert_eq!(row.fill(), 4);
        assert_eq!(row.committed(), 2);
        row.leave();
        assert_eq!(row.fill(), 2);
        row.hover(5);
        assert_eq!(row.click(3), 3);
        assert!(!row.is_previewing());
        assert_eq!(row.fill(), 3);
    }
}

//! Feedback Record
//!
//! The document written to the feedback collection. Built once per
//! submission and never modified; the store adds the server timestamp.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::contact::CustomerInfo;
use super::rating::{Cluster, RatingDimension, RatingSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuExperience {
    pub ease: u8,
    pub clarity: u8,
    pub speed: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantExperience {
    pub food_quality: u8,
    pub ambience: u8,
    pub pricing: u8,
    pub service: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingGroups {
    pub menu_experience: MenuExperience,
    pub restaurant_experience: RestaurantExperience,
}

impl From<&RatingSet> for RatingGroups {
    fn from(ratings: &RatingSet) -> Self {
        use RatingDimension::*;
        Self {
            menu_experience: MenuExperience {
                ease: ratings.get(MenuEase),
                clarity: ratings.get(MenuClarity),
                speed: ratings.get(MenuSpeed),
            },
            restaurant_experience: RestaurantExperience {
                food_quality: ratings.get(FoodQuality),
                ambience: ratings.get(Ambience),
                pricing: ratings.get(Pricing),
                service: ratings.get(Service),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScores {
    pub menu_average: f64,
    pub restaurant_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub user_agent: String,
    /// Client clock, epoch milliseconds.
    pub timestamp: i64,
}

/// What the browser knows at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientContext {
    pub now: DateTime<FixedOffset>,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// `dd/mm/yyyy`
    pub date: String,
    /// `hh:mm am|pm`
    pub time: String,
    pub ratings: RatingGroups,
    pub customer_info: CustomerInfo,
    pub overall_scores: OverallScores,
    pub device_info: DeviceInfo,
}

impl FeedbackRecord {
    pub fn assemble(ratings: &RatingSet, customer: CustomerInfo, client: &ClientContext) -> Self {
        Self {
            date: client.now.format("%d/%m/%Y").to_string(),
            time: client.now.format("%I:%M %P").to_string(),
            ratings: RatingGroups::from(ratings),
            customer_info: customer,
            overall_scores: OverallScores {
                menu_average: cluster_average(&ratings.cluster_scores(Cluster::Menu)),
                restaurant_average: cluster_average(&ratings.cluster_scores(Cluster::Restaurant)),
            },
            device_info: DeviceInfo {
                user_agent: client.user_agent.clone(),
                timestamp: client.now.timestamp_millis(),
            },
        }
    }
}

/// Mean of the nonzero scores to one decimal place; 0 when none are rated.
pub fn cluster_average(scores: &[u8]) -> f64 {
    let rated: Vec<f64> = scores.iter().filter(|&&s| s > 0).map(|&s| f64::from(s)).collect();
    if rated.is_empty() {
        return 0.0;
    }
    let mean = rated.iter().sum::<f64>() / rated.len() as f64;
    (mean * 10.0).round() / 10.0
}

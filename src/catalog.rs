use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A signup-able offering, as served by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current participants. Negative when over-subscribed.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Every activity from the last successful fetch, keyed by name.
///
/// Iteration order is the key order of the server's JSON object. The catalog
/// is never patched locally: each fetch replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    activities: IndexMap<String, Activity>,
}

impl Catalog {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(name, a)| (name.as_str(), a))
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self {
            activities: iter.into_iter().collect(),
        }
    }
}

// --- Category ---

/// Coarse grouping derived from keywords in the activity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Club,
    Team,
    Class,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Club,
        Category::Team,
        Category::Class,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Club => "Club",
            Category::Team => "Team",
            Category::Class => "Class",
            Category::Other => "Other",
        }
    }

    /// Inverse of [`Category::label`]. Case-sensitive.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify by name. Club beats Team beats Class, so "Chess Club Team" is a Club.
pub fn derive_category(name: &str) -> Category {
    if name.contains("Club") {
        Category::Club
    } else if name.contains("Team") {
        Category::Team
    } else if name.contains("Class") {
        Category::Class
    } else {
        Category::Other
    }
}

// --- Time token ---

static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)[^,]*,?\s*([\d:APM\-\s]+)",
    )
    .expect("time token pattern is valid")
});

/// Time expression following the first weekday in the schedule, or `""`.
///
/// Only used as a sort key; the result is not validated.
pub fn derive_time_token(activity: &Activity) -> &str {
    TIME_TOKEN
        .captures(&activity.schedule)
        .and_then(|caps| caps.get(2))
        .map_or("", |m| m.as_str())
}

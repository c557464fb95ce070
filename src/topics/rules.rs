//! Built-in keyword rules and DOI overrides for environmental seismology papers.

use crate::models::Topic;

/// Keywords that file a paper under one topic.
///
/// Keywords are lowercase and matched as plain substrings, so "volcan" also
/// hits "volcanic" and "volcano".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

impl TopicRule {
    /// Create a rule, lowercasing the keywords
    pub fn new<I, S>(topic: Topic, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            topic,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Returns true if any keyword occurs in `text` (already lowercased)
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(kw.as_str()))
    }
}

const DEBRIS_FLOW: &[&str] = &[
    "debris flow",
    "debris-flow",
    "lahar",
    "mudflow",
    "hyperconcentrated",
    "mud flow",
];

const LANDSLIDE: &[&str] = &[
    "landslide",
    "rockfall",
    "rock fall",
    "rock-fall",
    "mass movement",
    "mass wasting",
    "slope failure",
    "slope stability",
    "landquake",
    "rock avalanche",
    "rockslide",
    "rock slide",
    "landslip",
    "slope collapse",
    "cliff collapse",
    "calving",
];

const GLACIER: &[&str] = &[
    "glacier",
    "glacial",
    "ice sheet",
    "ice stream",
    "firn",
    "cryoseism",
    "icequake",
    "ice quake",
    "antarctic",
    "arctic",
    "snow avalanche",
    "ice cap",
    "permafrost",
    "frozen",
];

const RIVER: &[&str] = &[
    "river",
    "bedload",
    "bed load",
    "fluvial",
    "stream flow",
    "streamflow",
    "baseflow",
    "turbulence",
    "boulder",
    "sediment transport",
    "gravel",
    "channel",
];

const HYDROLOGY: &[&str] = &[
    "groundwater",
    "water table",
    "hydrol",
    "water storage",
    "soil moisture",
    "aquifer",
    "precipitation",
    "rainfall",
    "drought",
    "water level",
    "pore pressure",
];

const VOLCANO: &[&str] = &[
    "volcan",
    "eruption",
    "magma",
    "lava",
    "pyroclastic",
    "volcanic tremor",
    "fumarole",
];

const METHODS: &[&str] = &[
    "ambient noise",
    "dv/v",
    "interferometry",
    "machine learning",
    "deep learning",
    "neural network",
    "classification method",
    "detection method",
    "tomography",
    "inversion method",
];

/// The built-in rule table in priority order. The trailing `other` rule has no
/// keywords and only exists as the catch-all.
pub fn default_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new(Topic::DebrisFlow, DEBRIS_FLOW),
        TopicRule::new(Topic::Landslide, LANDSLIDE),
        TopicRule::new(Topic::Glacier, GLACIER),
        TopicRule::new(Topic::River, RIVER),
        TopicRule::new(Topic::Hydrology, HYDROLOGY),
        TopicRule::new(Topic::Volcano, VOLCANO),
        TopicRule::new(Topic::Methods, METHODS),
        TopicRule::new(Topic::Other, &[] as &[&str]),
    ]
}

/// Manual DOI overrides for papers the keyword rules file under the wrong primary topic
pub fn default_overrides() -> Vec<(String, Vec<Topic>)> {
    vec![(
        // Kanamori & Given 1982, landslide single-force source
        "10.1029/JB087iB07p05422".to_string(),
        vec![Topic::Landslide, Topic::Volcano],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_order() {
        let order: Vec<Topic> = default_rules().iter().map(|r| r.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::DebrisFlow,
                Topic::Landslide,
                Topic::Glacier,
                Topic::River,
                Topic::Hydrology,
                Topic::Volcano,
                Topic::Methods,
                Topic::Other,
            ]
        );
    }

    #[test]
    fn test_catch_all_has_no_keywords() {
        let rules = default_rules();
        let last = rules.last().unwrap();
        assert_eq!(last.topic, Topic::Other);
        assert!(last.keywords.is_empty());
        assert!(!last.matches("anything at all"));
    }

    #[test]
    fn test_rule_matches_inside_words() {
        let rule = TopicRule::new(Topic::Volcano, ["Volcan"]);
        assert_eq!(rule.keywords, vec!["volcan".to_string()]);
        assert!(rule.matches("a volcanic tremor study"));
        assert!(!rule.matches("a river study"));
    }

    #[test]
    fn test_all_keywords_are_lowercase() {
        for rule in default_rules() {
            for kw in &rule.keywords {
                assert_eq!(kw, &kw.to_lowercase());
            }
        }
    }
}

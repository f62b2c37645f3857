//! Destination knowledge base.
//!
//! One table drives both keyword matching and region matching: a region's city
//! list is every entry tagged with that region.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Broad areas a user may name instead of a specific city
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    UnitedStates,
    Europe,
    BrazilianNortheast,
    Caribbean,
}

lazy_static! {
    static ref UNITED_STATES_PATTERN: Regex =
        Regex::new(r"\b(eua|estados unidos|usa|am[eé]rica)\b").expect("Invalid regex pattern");

    static ref EUROPE_PATTERN: Regex =
        Regex::new(r"\b(europa|europe|europeu|europeia)\b").expect("Invalid regex pattern");

    static ref NORTHEAST_PATTERN: Regex =
        Regex::new(r"\b(nordeste|northeast)\b").expect("Invalid regex pattern");

    static ref CARIBBEAN_PATTERN: Regex =
        Regex::new(r"\b(caribe|caribbean|caribenho)\b").expect("Invalid regex pattern");
}

impl Region {
    /// Evaluation order for the region tier
    pub const ALL: [Region; 4] = [
        Region::UnitedStates,
        Region::Europe,
        Region::BrazilianNortheast,
        Region::Caribbean,
    ];

    pub fn pattern(&self) -> &'static Regex {
        match self {
            Region::UnitedStates => &*UNITED_STATES_PATTERN,
            Region::Europe => &*EUROPE_PATTERN,
            Region::BrazilianNortheast => &*NORTHEAST_PATTERN,
            Region::Caribbean => &*CARIBBEAN_PATTERN,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::UnitedStates => "Estados Unidos",
            Region::Europe => "Europa",
            Region::BrazilianNortheast => "Nordeste",
            Region::Caribbean => "Caribe",
        }
    }

    pub fn mentioned_in(&self, goal_text: &str) -> bool {
        self.pattern().is_match(goal_text)
    }

    pub fn destinations(self) -> impl Iterator<Item = &'static Destination> {
        DESTINATIONS.iter().filter(move |d| d.region == Some(self))
    }
}

/// A canonical destination with the words that point at it
#[derive(Debug)]
pub struct Destination {
    pub name: &'static str,
    /// Other spellings a promotion may use for the same place (lowercase)
    pub aliases: &'static [&'static str],
    /// Synonyms searched for in goal text (lowercase)
    pub keywords: &'static [&'static str],
    pub region: Option<Region>,
}

impl Destination {
    /// Canonical name and aliases, lowercased
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.name.to_lowercase())
            .chain(self.aliases.iter().map(|a| a.to_string()))
    }

    /// Whether a lowercased promotion destination refers to this entry.
    /// Containment is checked in both directions.
    pub fn identifies(&self, promo_destination: &str) -> bool {
        self.names()
            .any(|name| name.contains(promo_destination) || promo_destination.contains(name.as_str()))
    }

    /// First keyword present in the goal text
    pub fn keyword_in(&self, goal_text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| goal_text.contains(k))
    }
}

pub static DESTINATIONS: &[Destination] = &[
    // United States
    Destination {
        name: "Miami",
        aliases: &[],
        keywords: &["miami", "florida", "flórida", "south beach"],
        region: Some(Region::UnitedStates),
    },
    Destination {
        name: "Orlando",
        aliases: &[],
        keywords: &["orlando", "disney", "universal studios"],
        region: Some(Region::UnitedStates),
    },
    Destination {
        name: "New York",
        aliases: &["nova york", "nova iorque"],
        keywords: &["new york", "nova york", "nova iorque", "nyc", "manhattan"],
        region: Some(Region::UnitedStates),
    },
    Destination {
        name: "Los Angeles",
        aliases: &[],
        keywords: &["los angeles", "hollywood", "califórnia", "california"],
        region: Some(Region::UnitedStates),
    },
    Destination {
        name: "Las Vegas",
        aliases: &[],
        keywords: &["las vegas", "vegas", "nevada"],
        region: Some(Region::UnitedStates),
    },
    // Europe
    Destination {
        name: "Lisboa",
        aliases: &["lisbon"],
        keywords: &["lisboa", "lisbon", "portugal", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Paris",
        aliases: &[],
        keywords: &["paris", "frança", "franca", "france", "torre eiffel", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Londres",
        aliases: &["london"],
        keywords: &["londres", "london", "inglaterra", "england", "reino unido", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Madrid",
        aliases: &["madri"],
        keywords: &["madrid", "madri", "espanha", "spain", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Roma",
        aliases: &["rome"],
        keywords: &["roma", "rome", "itália", "italia", "italy", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Amsterdam",
        aliases: &["amsterdã", "amsterda"],
        keywords: &["amsterdam", "amsterdã", "holanda", "netherlands", "europa", "europe"],
        region: Some(Region::Europe),
    },
    Destination {
        name: "Barcelona",
        aliases: &[],
        keywords: &["barcelona", "catalunha", "espanha", "spain", "europa", "europe"],
        region: Some(Region::Europe),
    },
    // Brazilian Northeast
    Destination {
        name: "Salvador",
        aliases: &[],
        keywords: &["salvador", "bahia"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "Recife",
        aliases: &[],
        keywords: &["recife", "pernambuco"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "Fortaleza",
        aliases: &[],
        keywords: &["fortaleza", "ceará", "ceara", "jericoacoara"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "Natal",
        aliases: &[],
        keywords: &["natal", "rio grande do norte"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "Maceió",
        aliases: &["maceio"],
        keywords: &["maceió", "maceio", "alagoas"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "João Pessoa",
        aliases: &["joao pessoa"],
        keywords: &["joão pessoa", "joao pessoa", "paraíba", "paraiba"],
        region: Some(Region::BrazilianNortheast),
    },
    Destination {
        name: "Porto de Galinhas",
        aliases: &[],
        keywords: &["porto de galinhas", "galinhas"],
        region: Some(Region::BrazilianNortheast),
    },
    // Caribbean
    Destination {
        name: "Cancún",
        aliases: &["cancun"],
        keywords: &["cancún", "cancun", "méxico", "mexico", "riviera maya"],
        region: Some(Region::Caribbean),
    },
    Destination {
        name: "Punta Cana",
        aliases: &[],
        keywords: &["punta cana", "república dominicana", "republica dominicana"],
        region: Some(Region::Caribbean),
    },
    Destination {
        name: "Aruba",
        aliases: &[],
        keywords: &["aruba"],
        region: Some(Region::Caribbean),
    },
    Destination {
        name: "Curaçao",
        aliases: &["curacao"],
        keywords: &["curaçao", "curacao"],
        region: Some(Region::Caribbean),
    },
    // Elsewhere
    Destination {
        name: "Buenos Aires",
        aliases: &[],
        keywords: &["buenos aires", "argentina"],
        region: None,
    },
    Destination {
        name: "Santiago",
        aliases: &[],
        keywords: &["santiago", "chile"],
        region: None,
    },
    Destination {
        name: "Tóquio",
        aliases: &["toquio", "tokyo"],
        keywords: &["tóquio", "toquio", "tokyo", "japão", "japao", "japan"],
        region: None,
    },
    Destination {
        name: "Dubai",
        aliases: &[],
        keywords: &["dubai", "emirados"],
        region: None,
    },
];

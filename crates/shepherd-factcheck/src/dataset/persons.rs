//! Biblical figures and their canonical roles.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{earliest_key, fold};

#[derive(Debug, Clone, Copy)]
pub struct PersonRecord {
    pub key: &'static str,
    pub name: &'static str,
    /// Lowercase role words; any one appearing in a claim counts as a match.
    pub roles: &'static [&'static str],
}

const fn person(key: &'static str, name: &'static str, roles: &'static [&'static str]) -> PersonRecord {
    PersonRecord { key, name, roles }
}

pub const PERSONS: &[PersonRecord] = &[
    person("abraham", "Abraham", &["patriarch", "father of israel", "father of many nations"]),
    person("moses", "Moses", &["prophet", "leader", "lawgiver"]),
    person("joshua", "Joshua", &["leader", "successor of moses", "commander"]),
    person("deborah", "Deborah", &["judge", "prophetess"]),
    person("samuel", "Samuel", &["prophet", "judge", "priest"]),
    person("ruth", "Ruth", &["moabite", "ancestor of david", "widow"]),
    person("david", "David", &["king", "shepherd", "psalmist"]),
    person("solomon", "Solomon", &["king", "son of david"]),
    person("elijah", "Elijah", &["prophet"]),
    person("isaiah", "Isaiah", &["prophet"]),
    person("jeremiah", "Jeremiah", &["prophet"]),
    person("daniel", "Daniel", &["prophet", "exile", "official"]),
    person("esther", "Esther", &["queen"]),
    person("john the baptist", "John the Baptist", &["prophet", "forerunner", "baptizer"]),
    person("mary", "Mary", &["mother of jesus", "virgin", "mother"]),
    person("peter", "Peter", &["apostle", "disciple", "fisherman"]),
    person("matthew", "Matthew", &["apostle", "disciple", "tax collector"]),
    person("paul", "Paul", &["apostle", "missionary", "pharisee", "tentmaker"]),
    person("luke", "Luke", &["physician", "evangelist", "companion of paul"]),
    person("pontius pilate", "Pontius Pilate", &["governor", "prefect"]),
    person("pilate", "Pontius Pilate", &["governor", "prefect"]),
    person("herod", "Herod", &["king", "ruler", "tetrarch"]),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static PersonRecord>> =
    LazyLock::new(|| PERSONS.iter().map(|p| (p.key, p)).collect());

pub fn lookup(name: &str) -> Option<&'static PersonRecord> {
    BY_KEY.get(fold(name).as_str()).copied()
}

/// The first figure named in already-folded text.
pub fn find_in(folded: &str) -> Option<&'static PersonRecord> {
    let (_, key) = earliest_key(folded, BY_KEY.keys().copied())?;
    BY_KEY.get(key).copied()
}

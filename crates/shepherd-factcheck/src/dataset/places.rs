//! Place names and whether archaeology attests the location.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{earliest_key, fold};

#[derive(Debug, Clone, Copy)]
pub struct PlaceRecord {
    pub key: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub archaeological_evidence: bool,
}

const fn place(
    key: &'static str,
    name: &'static str,
    region: &'static str,
    archaeological_evidence: bool,
) -> PlaceRecord {
    PlaceRecord {
        key,
        name,
        region,
        archaeological_evidence,
    }
}

pub const PLACES: &[PlaceRecord] = &[
    place("jerusalem", "Jerusalem", "Judea", true),
    place("bethlehem", "Bethlehem", "Judea", true),
    place("nazareth", "Nazareth", "Galilee", true),
    place("capernaum", "Capernaum", "Galilee", true),
    place("jericho", "Jericho", "the Jordan valley", true),
    place("babylon", "Babylon", "Mesopotamia", true),
    place("nineveh", "Nineveh", "Assyria", true),
    place("ur", "Ur", "southern Mesopotamia", true),
    place("corinth", "Corinth", "Achaia", true),
    place("ephesus", "Ephesus", "Asia Minor", true),
    place("sea of galilee", "Sea of Galilee", "Galilee", true),
    place("jordan river", "Jordan River", "the Jordan valley", true),
    place("mount sinai", "Mount Sinai", "the Sinai peninsula", false),
    place("emmaus", "Emmaus", "Judea", false),
    place("golgotha", "Golgotha", "Jerusalem", false),
    place("eden", "Eden", "unknown", false),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static PlaceRecord>> =
    LazyLock::new(|| PLACES.iter().map(|p| (p.key, p)).collect());

pub fn lookup(name: &str) -> Option<&'static PlaceRecord> {
    BY_KEY.get(fold(name).as_str()).copied()
}

/// The first known place in already-folded text.
pub fn find_in(folded: &str) -> Option<&'static PlaceRecord> {
    let (_, key) = earliest_key(folded, BY_KEY.keys().copied())?;
    BY_KEY.get(key).copied()
}

//! Core-doctrine statements and known heresy phrases.

use super::find_word;

/// Recognized statements of core doctrine, lowercase.
pub const CORE_DOCTRINES: &[&str] = &[
    "jesus is the son of god",
    "jesus is the messiah",
    "jesus is fully god and fully man",
    "jesus rose from the dead",
    "the resurrection of jesus",
    "christ died for our sins",
    "salvation is by grace through faith",
    "saved by grace through faith",
    "one god in three persons",
    "god is a trinity",
    "the doctrine of the trinity",
    "the bodily resurrection",
];

/// Phrases that contradict core doctrine, lowercase.
pub const HERESY_PHRASES: &[&str] = &[
    "jesus was created",
    "jesus was just a man",
    "jesus was only a man",
    "jesus is not god",
    "salvation by works alone",
    "saved by works alone",
    "there are three gods",
    "the father became the son",
    "jesus did not rise",
    "the resurrection did not happen",
    "the resurrection never happened",
    "all religions lead to god",
];

/// First heresy phrase present in already-folded text.
pub fn heresy_in(folded: &str) -> Option<&'static str> {
    HERESY_PHRASES
        .iter()
        .copied()
        .find(|p| find_word(folded, p).is_some())
}

/// First core-doctrine statement present in already-folded text.
pub fn doctrine_in(folded: &str) -> Option<&'static str> {
    CORE_DOCTRINES
        .iter()
        .copied()
        .find(|p| find_word(folded, p).is_some())
}

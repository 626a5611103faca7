//! The closed set of supported algorithms, keyed by display name.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::sorts;
use crate::step::{Step, Value};

/// Descriptive asymptotic costs. Free-form labels, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Complexity {
    /// Time complexity in Big O notation
    pub time: &'static str,
    /// Space complexity in Big O notation
    pub space: &'static str,
}

/// A sorting algorithm that can emit a step log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
pub enum Algorithm {
    #[default]
    Bubble,
    CocktailShaker,
    Comb,
    Gnome,
    Insertion,
    Selection,
    Shell,
    Heap,
    Merge,
    Quick,
    Counting,
    Bogo,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Bubble,
        Algorithm::CocktailShaker,
        Algorithm::Comb,
        Algorithm::Gnome,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Shell,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Counting,
        Algorithm::Bogo,
    ];

    /// Unique display name; also the lookup key.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::CocktailShaker => "Cocktail Shaker Sort",
            Algorithm::Comb => "Comb Sort",
            Algorithm::Gnome => "Gnome Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Bogo => "Bogo Sort (Fun)",
        }
    }

    /// Textbook time and space complexity.
    pub const fn complexity(self) -> Complexity {
        let (time, space) = match self {
            Algorithm::Bubble
            | Algorithm::CocktailShaker
            | Algorithm::Gnome
            | Algorithm::Insertion
            | Algorithm::Selection => ("O(n²)", "O(1)"),
            Algorithm::Comb | Algorithm::Heap => ("O(n log n)", "O(1)"),
            Algorithm::Shell => ("O(n log²n)", "O(1)"),
            Algorithm::Merge => ("O(n log n)", "O(n)"),
            Algorithm::Quick => ("O(n log n)", "O(log n)"),
            Algorithm::Counting => ("O(n + k)", "O(k)"),
            Algorithm::Bogo => ("O(n × n!)", "O(1)"),
        };
        Complexity { time, space }
    }

    /// Whether two runs on the same input may produce different logs.
    pub const fn is_randomized(self) -> bool {
        matches!(self, Algorithm::Bogo)
    }

    /// Resolve a display name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    /// Generate the step log for `input`, drawing any randomness from the
    /// thread-local generator.
    pub fn generate_steps(self, input: &[Value]) -> Vec<Step> {
        self.generate_steps_with(input, &mut rand::thread_rng())
    }

    /// Generate the step log for `input`, drawing any randomness from `rng`.
    ///
    /// Deterministic for every algorithm when `rng` is deterministic.
    pub fn generate_steps_with(self, input: &[Value], rng: &mut dyn RandomSource) -> Vec<Step> {
        match self {
            Algorithm::Bubble => sorts::bubble(input),
            Algorithm::CocktailShaker => sorts::cocktail_shaker(input),
            Algorithm::Comb => sorts::comb(input),
            Algorithm::Gnome => sorts::gnome(input),
            Algorithm::Insertion => sorts::insertion(input),
            Algorithm::Selection => sorts::selection(input),
            Algorithm::Shell => sorts::shell(input),
            Algorithm::Heap => sorts::heap(input),
            Algorithm::Merge => sorts::merge(input),
            Algorithm::Quick => sorts::quick(input),
            Algorithm::Counting => sorts::counting(input),
            Algorithm::Bogo => sorts::bogo(input, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::from_name(&name)
    }
}

/// Generate the step log for `algorithm` over `input`.
pub fn generate_steps(algorithm: Algorithm, input: &[Value]) -> Vec<Step> {
    algorithm.generate_steps(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_resolve() {
        let names: HashSet<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), Algorithm::ALL.len());

        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Ok(algorithm));
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "Sleep Sort".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("Sleep Sort".into()))
        );
    }

    #[test]
    fn only_bogo_is_randomized() {
        let randomized: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_randomized())
            .collect();
        assert_eq!(randomized, vec![Algorithm::Bogo]);
    }

    #[test]
    fn complexity_labels() {
        assert_eq!(Algorithm::Merge.complexity().space, "O(n)");
        assert_eq!(Algorithm::Counting.complexity().time, "O(n + k)");
        assert_eq!(Algorithm::Quick.complexity().space, "O(log n)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_by_display_name() {
        let json = serde_json::to_string(&Algorithm::CocktailShaker).unwrap();
        assert_eq!(json, r#""Cocktail Shaker Sort""#);
        let parsed: Algorithm = serde_json::from_str(r#""Heap Sort""#).unwrap();
        assert_eq!(parsed, Algorithm::Heap);
        assert!(serde_json::from_str::<Algorithm>(r#""Nope""#).is_err());
    }
}

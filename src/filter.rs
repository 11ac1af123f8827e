use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{derive_category, derive_time_token, Activity, Catalog, Category};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the catalog's iteration order.
    #[default]
    Catalog,
    Name,
    Time,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Catalog, SortKey::Name, SortKey::Time];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Catalog => "Default",
            SortKey::Name => "Name",
            SortKey::Time => "Time",
        }
    }

    /// Parse the wire value used by the original sort control (`name`, `time`).
    /// Anything else keeps catalog order.
    pub fn from_value(value: &str) -> SortKey {
        match value {
            "name" => SortKey::Name,
            "time" => SortKey::Time,
            _ => SortKey::Catalog,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three inputs of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub category: Option<Category>,
    pub sort: SortKey,
}

impl Filter {
    /// Surviving activities in display order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<(&'a str, &'a Activity)> {
        let matcher = WordMatcher::new(&self.search);
        let mut kept: Vec<(&str, &Activity)> = catalog
            .iter()
            .filter(|(name, activity)| {
                if let Some(m) = &matcher {
                    if !m.is_match(name) && !m.is_match(&activity.description) {
                        return false;
                    }
                }
                match self.category {
                    Some(category) => derive_category(name) == category,
                    None => true,
                }
            })
            .collect();

        // sort_by is stable, so equal keys keep catalog order
        match self.sort {
            SortKey::Catalog => {}
            SortKey::Name => kept.sort_by(|(a, _), (b, _)| collate(a, b)),
            SortKey::Time => kept.sort_by(|(_, a), (_, b)| {
                collate(derive_time_token(a), derive_time_token(b))
            }),
        }
        kept
    }
}

/// Case-insensitive whole-word matcher for the search box.
pub struct WordMatcher {
    re: Regex,
}

impl WordMatcher {
    /// `None` when the trimmed search text is empty (no filtering).
    pub fn new(search: &str) -> Option<WordMatcher> {
        let term = search.trim();
        if term.is_empty() {
            return None;
        }
        // ASCII word boundaries: accented letters count as separators
        let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(term));
        match Regex::new(&pattern) {
            Ok(re) => Some(WordMatcher { re }),
            Err(e) => {
                // only reachable if the escaped term blows the size limit
                tracing::warn!("search pattern rejected: {e}");
                None
            }
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.re.is_match(haystack)
    }
}

/// Root-locale style collation, close to what ICU does for Latin text.
///
/// Compared in three passes: base characters (accents and case folded away,
/// whitespace < punctuation < symbols < digits < letters), then accents, then
/// case with lowercase first.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if matches!(c, '`' | '^' | '+' | '<' | '=' | '>' | '|' | '~' | '$') {
        CharClass::Symbol
    } else {
        CharClass::Punctuation
    }
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn primary_key(s: &str) -> Vec<(CharClass, char)> {
    base_chars(s)
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
        .collect()
}

fn accent_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    base_chars(s).map(char::is_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(description: &str, schedule: &str) -> Activity {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants: 10,
            participants: Vec::new(),
        }
    }

    fn names(filter: &Filter, catalog: &Catalog) -> Vec<String> {
        filter
            .apply(catalog)
            .into_iter()
            .map(|(n, _)| n.to_string())
            .collect()
    }

    fn sample() -> Catalog {
        [
            ("Chess Club", activity("Learn strategies", "Fridays, 3:30 PM - 5:00 PM")),
            ("Clubhouse Crew", activity("Build the clubhouse", "Mondays, 4:00 PM - 5:00 PM")),
            ("Basketball Team", activity("Practice and games", "Wednesdays, 1:00 PM - 2:30 PM")),
            ("Art Class", activity("Painting with the chess club", "Thursdays, 3:15 PM - 4:45 PM")),
        ]
        .into_iter()
        .map(|(n, a)| (n.to_string(), a))
        .collect()
    }

    // -----------------------------------------------------------------------
    // search
    // -----------------------------------------------------------------------

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let f = Filter::default();
        assert_eq!(
            names(&f, &sample()),
            vec!["Chess Club", "Clubhouse Crew", "Basketball Team", "Art Class"]
        );
    }

    #[test]
    fn search_is_whole_word_case_insensitive() {
        let f = Filter {
            search: "club".into(),
            ..Default::default()
        };
        // "Clubhouse" is not a whole-word hit; Art Class matches via description
        assert_eq!(names(&f, &sample()), vec!["Chess Club", "Art Class"]);
    }

    #[test]
    fn search_whitespace_only_is_empty() {
        let f = Filter {
            search: "   ".into(),
            ..Default::default()
        };
        assert_eq!(names(&f, &sample()).len(), 4);
    }

    #[test]
    fn search_metacharacters_are_literal() {
        let catalog: Catalog = [("C++ Club".to_string(), activity("", ""))]
            .into_iter()
            .collect();
        let f = Filter {
            search: "c++".into(),
            ..Default::default()
        };
        // escaped, so no panic and no regex semantics; `\b` after `+` needs a word char
        assert!(names(&f, &catalog).is_empty());
        let f = Filter {
            search: "(".into(),
            ..Default::default()
        };
        assert!(names(&f, &catalog).is_empty());
    }

    #[test]
    fn search_multi_word_phrase() {
        let f = Filter {
            search: "Chess Club".into(),
            ..Default::default()
        };
        assert_eq!(names(&f, &sample()), vec!["Chess Club", "Art Class"]);
    }

    // -----------------------------------------------------------------------
    // category
    // -----------------------------------------------------------------------

    #[test]
    fn category_filter() {
        let f = Filter {
            category: Some(Category::Club),
            ..Default::default()
        };
        assert_eq!(names(&f, &sample()), vec!["Chess Club", "Clubhouse Crew"]);
        let f = Filter {
            category: Some(Category::Other),
            ..Default::default()
        };
        assert!(names(&f, &sample()).is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let f = Filter {
            search: "club".into(),
            category: Some(Category::Class),
            ..Default::default()
        };
        assert_eq!(names(&f, &sample()), vec!["Art Class"]);
    }

    // -----------------------------------------------------------------------
    // sort
    // -----------------------------------------------------------------------

    #[test]
    fn sort_by_name() {
        let catalog: Catalog = [
            ("B Club".to_string(), activity("", "")),
            ("A Team".to_string(), activity("", "")),
        ]
        .into_iter()
        .collect();
        let f = Filter {
            sort: SortKey::Name,
            ..Default::default()
        };
        assert_eq!(names(&f, &catalog), vec!["A Team", "B Club"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let catalog: Catalog = [
            ("banjo".to_string(), activity("", "")),
            ("Archery".to_string(), activity("", "")),
            ("Chess".to_string(), activity("", "")),
        ]
        .into_iter()
        .collect();
        let f = Filter {
            sort: SortKey::Name,
            ..Default::default()
        };
        assert_eq!(names(&f, &catalog), vec!["Archery", "banjo", "Chess"]);
    }

    #[test]
    fn sort_by_time_token() {
        let f = Filter {
            sort: SortKey::Time,
            ..Default::default()
        };
        assert_eq!(
            names(&f, &sample()),
            vec!["Basketball Team", "Art Class", "Chess Club", "Clubhouse Crew"]
        );
    }

    #[test]
    fn sort_by_time_is_stable_for_missing_tokens() {
        let catalog: Catalog = [
            ("Z".to_string(), activity("", "TBD")),
            ("Y".to_string(), activity("", "Flexible")),
            ("X".to_string(), activity("", "Tuesday, 1:00 PM")),
        ]
        .into_iter()
        .collect();
        let f = Filter {
            sort: SortKey::Time,
            ..Default::default()
        };
        assert_eq!(names(&f, &catalog), vec!["Z", "Y", "X"]);
    }

    #[test]
    fn sort_key_from_value() {
        assert_eq!(SortKey::from_value("name"), SortKey::Name);
        assert_eq!(SortKey::from_value("time"), SortKey::Time);
        assert_eq!(SortKey::from_value(""), SortKey::Catalog);
        assert_eq!(SortKey::from_value("Name"), SortKey::Catalog);
    }

    #[test]
    fn sort_by_time_puts_single_digit_hour_before_two_digit() {
        let catalog: Catalog = [
            ("Early".to_string(), activity("", "Monday, 10:00 AM - 11:00 AM")),
            ("Late".to_string(), activity("", "Tuesday, 1:00 PM - 2:00 PM")),
        ]
        .into_iter()
        .collect();
        let f = Filter {
            sort: SortKey::Time,
            ..Default::default()
        };
        assert_eq!(names(&f, &catalog), vec!["Late", "Early"]);
    }

    #[test]
    fn collate_orders_punctuation_before_digits_before_letters() {
        assert_eq!(collate("1:00 PM", "10:00 AM"), Ordering::Less);
        assert_eq!(collate("a b", "ab"), Ordering::Less);
        assert_eq!(collate("9", "a"), Ordering::Less);
        assert_eq!(collate("-", "0"), Ordering::Less);
    }

    #[test]
    fn collate_folds_accents_before_comparing() {
        assert_eq!(collate("\u{e9}tude", "ezra"), Ordering::Less);
        assert_eq!(collate("cote", "c\u{f4}te"), Ordering::Less);
        assert_eq!(collate("C\u{f4}te", "cote"), Ordering::Greater);
    }

    #[test]
    fn search_word_boundary_treats_accents_as_separators() {
        let catalog: Catalog = [("Caf\u{e9} Club".to_string(), activity("", ""))]
            .into_iter()
            .collect();
        let f = Filter {
            search: "caf".into(),
            ..Default::default()
        };
        assert_eq!(names(&f, &catalog), vec!["Caf\u{e9} Club"]);
    }

    #[test]
    fn collate_lowercase_first_on_tie() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("a", "B"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }
}

//! Ordering and filtering of loaded entities
//!
//! Every function here is pure: it reads a slice and returns a new vector,
//! leaving the input untouched.

use std::cmp::Ordering;

use indexmap::IndexSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::frontmatter::parse_date_string;
use super::post::{Dated, Ranked, Tagged};
use crate::error::{Error, Result};

/// Compare two titles the way a reader expects them alphabetized.
///
/// Base letters decide first, ignoring case and diacritics, so `Éthique`
/// sorts with the `e`s. Then accents (`ecole` before `école`), then case
/// (lower before upper), then raw code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Canonically decomposed and lower-cased
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// `folded` with combining marks removed
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Title tie-break: descending
fn title_descending<T: Ranked>(a: &T, b: &T) -> Ordering {
    locale_cmp(b.title(), a.title())
}

/// Sort by ascending priority, ties by descending title, keep the first `n`.
pub fn by_priority<T: Ranked + Clone>(entities: &[T], n: usize) -> Result<Vec<T>> {
    if n < 1 {
        return Err(Error::InvalidArgument(format!(
            "count must be at least 1, got {}",
            n
        )));
    }

    let mut sorted = entities.to_vec();
    sorted.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| title_descending(a, b))
    });
    sorted.truncate(n);

    Ok(sorted)
}

/// Sort newest first, ties by descending title.
///
/// Dates that cannot be parsed sort as the oldest, after every parsable
/// date.
pub fn by_date_descending<T: Dated + Clone>(entities: &[T]) -> Vec<T> {
    let mut keyed: Vec<_> = entities
        .iter()
        .map(|e| (parse_date_string(e.date()), e))
        .collect();

    // `None` orders below every `Some`, so reversing puts it last
    keyed.sort_by(|(da, a), (db, b)| db.cmp(da).then_with(|| title_descending(*a, *b)));

    keyed.into_iter().map(|(_, e)| e.clone()).collect()
}

/// Keep entities sharing at least one tag with `active_tags`.
///
/// An empty `active_tags` keeps everything.
pub fn by_tag_intersection<T, S>(entities: &[T], active_tags: &[S]) -> Vec<T>
where
    T: Tagged + Clone,
    S: AsRef<str>,
{
    if active_tags.is_empty() {
        return entities.to_vec();
    }

    entities
        .iter()
        .filter(|e| {
            e.tags()
                .iter()
                .any(|tag| active_tags.iter().any(|active| active.as_ref() == tag.as_str()))
        })
        .cloned()
        .collect()
}

/// Every distinct tag across `entities`, in first-seen order
pub fn collect_distinct_tags<T: Tagged>(entities: &[T]) -> IndexSet<String> {
    entities
        .iter()
        .flat_map(|e| e.tags().iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        title: &'static str,
        priority: i64,
        date: &'static str,
        tags: Vec<String>,
    }

    impl Ranked for Item {
        fn priority(&self) -> i64 {
            self.priority
        }
        fn title(&self) -> &str {
            self.title
        }
    }

    impl Dated for Item {
        fn date(&self) -> &str {
            self.date
        }
    }

    impl Tagged for Item {
        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn item(title: &'static str, priority: i64, date: &'static str) -> Item {
        Item {
            title,
            priority,
            date,
            tags: Vec::new(),
        }
    }

    fn tagged(title: &'static str, tags: &[&str]) -> Item {
        Item {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..item(title, 1, "2024-01-01")
        }
    }

    fn titles(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.title).collect()
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("B", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "a"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_ignores_diacritics_first() {
        assert_eq!(locale_cmp("Éthique", "Zoo"), Ordering::Less);
        assert_eq!(locale_cmp("été", "etude"), Ordering::Less);
        assert_eq!(locale_cmp("Ecole", "École"), Ordering::Less);
        assert_eq!(locale_cmp("école", "École"), Ordering::Less);
        // precomposed and decomposed forms share their base letters
        assert_eq!(base_letters("\u{e9}t\u{e9}").collect::<String>(), "ete");
        assert_eq!(base_letters("E\u{301}TE\u{301}").collect::<String>(), "ete");
    }

    #[test]
    fn test_by_priority_accented_titles() {
        let items = vec![item("Zoo", 1, ""), item("Éthique", 1, ""), item("Art", 1, "")];
        let sorted = by_priority(&items, 3).unwrap();
        assert_eq!(titles(&sorted), vec!["Zoo", "Éthique", "Art"]);
    }

    #[test]
    fn test_by_priority_ties_by_title_descending() {
        let items = vec![item("A", 1, ""), item("B", 1, "")];
        let sorted = by_priority(&items, 2).unwrap();
        assert_eq!(titles(&sorted), vec!["B", "A"]);
    }

    #[test]
    fn test_by_priority_orders_and_truncates() {
        let items = vec![
            item("low", 3, ""),
            item("alpha", 1, ""),
            item("mid", 2, ""),
            item("zulu", 1, ""),
        ];

        let sorted = by_priority(&items, 3).unwrap();
        assert_eq!(titles(&sorted), vec!["zulu", "alpha", "mid"]);

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.priority < b.priority
                    || (a.priority == b.priority && locale_cmp(a.title, b.title).is_ge())
            );
        }
    }

    #[test]
    fn test_by_priority_n_larger_than_input() {
        let items = vec![item("only", 1, "")];
        assert_eq!(by_priority(&items, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_by_priority_is_stable_for_equal_keys() {
        let mut first = item("dup", 1, "");
        first.date = "first";
        let mut second = item("dup", 1, "");
        second.date = "second";

        let sorted = by_priority(&[first, second], 2).unwrap();
        assert_eq!(sorted[0].date, "first");
        assert_eq!(sorted[1].date, "second");
    }

    #[test]
    fn test_by_priority_rejects_zero() {
        let items = vec![item("A", 1, "")];
        assert!(matches!(
            by_priority(&items, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_by_date_descending() {
        let items = vec![
            item("old", 1, "2024-01-01"),
            item("new", 1, "2024-06-01"),
            item("mid", 1, "2024-03-15 08:00:00"),
        ];

        let sorted = by_date_descending(&items);
        assert_eq!(titles(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_by_date_ties_by_title_descending() {
        let items = vec![
            item("A", 1, "2024-01-01"),
            item("C", 1, "2024-01-01"),
            item("B", 1, "2024-01-01"),
        ];

        let sorted = by_date_descending(&items);
        assert_eq!(titles(&sorted), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_unparsable_dates_sort_oldest() {
        let items = vec![
            item("broken", 1, "not a date"),
            item("old", 1, "1999-12-31"),
            item("empty", 1, ""),
            item("new", 1, "2024-06-01"),
        ];

        let sorted = by_date_descending(&items);
        assert_eq!(titles(&sorted), vec!["new", "old", "empty", "broken"]);
    }

    #[test]
    fn test_by_date_does_not_mutate_input() {
        let items = vec![item("old", 1, "2024-01-01"), item("new", 1, "2024-06-01")];
        let _ = by_date_descending(&items);
        assert_eq!(titles(&items), vec!["old", "new"]);
    }

    #[test]
    fn test_tag_intersection() {
        let items = vec![tagged("first", &["go", "rust"]), tagged("second", &["ts"])];

        let filtered = by_tag_intersection(&items, &["rust"]);
        assert_eq!(titles(&filtered), vec!["first"]);

        let unfiltered = by_tag_intersection::<_, &str>(&items, &[]);
        assert_eq!(titles(&unfiltered), vec!["first", "second"]);

        let none = by_tag_intersection(&items, &["python".to_string()]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_collect_distinct_tags() {
        let items = vec![
            tagged("a", &["rust", "go"]),
            tagged("b", &["go", "ts"]),
            tagged("c", &[]),
        ];

        let tags = collect_distinct_tags(&items);
        assert_eq!(tags.len(), 3);
        for item in &items {
            for tag in &item.tags {
                assert!(tags.contains(tag));
            }
        }
    }
}

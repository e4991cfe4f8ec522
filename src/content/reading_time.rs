//! Reading-time estimate over rendered HTML

use lazy_static::lazy_static;
use regex::Regex;

/// Words read per minute
const WORDS_PER_MINUTE: f64 = 250.0;

/// Minutes added per embedded image
const MINUTES_PER_IMAGE: f64 = 0.25;

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new(r"[A-Za-z0-9_]").expect("valid word regex");
}

/// Estimate reading minutes of rendered HTML.
///
/// The content is split on single spaces. A token containing at least one
/// word character counts as a word; every `<img` occurrence inside a token
/// counts as an image, so two image tags glued into one token count twice.
/// The result is `ceil(words / 250 + 0.25 * images)`.
pub fn estimate_minutes(html: &str) -> u32 {
    let (words, images) = html
        .split(' ')
        .fold((0usize, 0usize), |(words, images), token| {
            (
                words + usize::from(WORD_CHAR.is_match(token)),
                images + token.matches("<img").count(),
            )
        });

    let minutes = words as f64 / WORDS_PER_MINUTE + MINUTES_PER_IMAGE * images as f64;
    minutes.ceil() as u32
}

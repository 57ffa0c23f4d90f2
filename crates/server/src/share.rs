//! Outbound share-intent links for a solved puzzle.
//!
//! Fire-and-forget: the front end opens these in a new tab; nothing comes
//! back to us.

use serde::Serialize;
use urlencoding::encode;

use puzzle_core::Difficulty;

#[derive(Debug, Clone, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Build share links with the "I solved today's puzzle" message.
pub fn share_links(difficulty: Difficulty, app_url: &str) -> ShareLinks {
    let text = format!("I solved today's #DailyChessPuzzle ({difficulty})! Can you?");
    let title = "Daily Chess Puzzle";

    ShareLinks {
        twitter: format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode(&text),
            encode(app_url)
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            encode(app_url),
            encode(&text)
        ),
        linkedin: format!(
            "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}&summary={}",
            encode(app_url),
            encode(title),
            encode(&text)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links_are_encoded() {
        let links = share_links(Difficulty::Advanced, "https://example.com");
        assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(links.twitter.contains("Advanced"));
        assert!(!links.twitter.contains(' '));
        assert!(links.facebook.contains("u=https%3A%2F%2Fexample.com"));
        assert!(links.linkedin.contains("Daily%20Chess%20Puzzle"));
    }
}

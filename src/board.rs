//! Board Utilities
//!
//! Helper functions for deciding what the page renders.

use crate::config::SessionGate;
use crate::models::Dare;

/// Top-level view chosen by the root component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootView {
    Landing,
    Board,
}

/// Pick the top-level view.
///
/// Under `SessionGate::Observed` both arms show the board, matching the
/// deployed page where signing in never changed the view.
pub fn root_view(logged_in: bool, gate: SessionGate) -> RootView {
    match gate {
        SessionGate::Observed => RootView::Board,
        SessionGate::Enforced if logged_in => RootView::Board,
        SessionGate::Enforced => RootView::Landing,
    }
}

/// Everything a dare card displays
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DareCardView {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub likes_label: String,
    pub added_by: Option<String>,
    pub liked: bool,
}

pub fn likes_label(likes: u32) -> String {
    format!("{} Likes", likes)
}

/// One card per dare, in collection order
pub fn card_views(dares: &[Dare], liked: &[u32]) -> Vec<DareCardView> {
    dares
        .iter()
        .map(|dare| DareCardView {
            id: dare.id,
            title: dare.title.clone(),
            body: dare.dare.clone(),
            likes_label: likes_label(dare.likes),
            added_by: dare.added_by.clone(),
            liked: liked.contains(&dare.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dare(id: u32, title: &str, body: &str, likes: u32) -> Dare {
        Dare {
            id,
            title: title.to_string(),
            dare: body.to_string(),
            likes,
            added_by: None,
        }
    }

    #[test]
    fn test_observed_gate_ignores_session_flag() {
        assert_eq!(root_view(true, SessionGate::Observed), RootView::Board);
        assert_eq!(root_view(false, SessionGate::Observed), RootView::Board);
    }

    #[test]
    fn test_enforced_gate_follows_session_flag() {
        assert_eq!(root_view(true, SessionGate::Enforced), RootView::Board);
        assert_eq!(root_view(false, SessionGate::Enforced), RootView::Landing);
    }

    #[test]
    fn test_one_card_per_dare_in_order() {
        let dares = vec![
            make_dare(30, "c", "z", 0),
            make_dare(10, "a", "x", 0),
            make_dare(20, "b", "y", 0),
        ];

        let cards = card_views(&dares, &[]);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![30, 10, 20]);
    }

    #[test]
    fn test_card_shows_fields_verbatim() {
        let dares = vec![make_dare(1, "  Spicy <b>", "Eat a ghost pepper!", 12)];

        let cards = card_views(&dares, &[]);

        assert_eq!(cards[0].title, "  Spicy <b>");
        assert_eq!(cards[0].body, "Eat a ghost pepper!");
        assert_eq!(cards[0].likes_label, "12 Likes");
        assert!(!cards[0].liked);
    }

    #[test]
    fn test_only_liked_card_is_marked() {
        let dares = vec![make_dare(1, "a", "x", 1), make_dare(2, "b", "y", 3)];

        let cards = card_views(&dares, &[2]);

        assert!(!cards[0].liked);
        assert!(cards[1].liked);
    }

    #[test]
    fn test_empty_collection_renders_no_cards() {
        assert!(card_views(&[], &[]).is_empty());
    }
}

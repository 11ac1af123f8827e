use std::fmt;

use crate::catalog::Catalog;
use crate::filter::Filter;

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// One participant row; carries what its removal control needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub activity: String,
    pub email: String,
}

/// Display card for a single activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<Participant>,
}

impl Card {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Entry in the "pick an activity" list. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
}

impl ActivityOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for ActivityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Cards and picker options for one render pass, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub cards: Vec<Card>,
    pub options: Vec<ActivityOption>,
}

/// Filter, sort and project the catalog. Pure: equal inputs give equal output.
pub fn render(catalog: &Catalog, filter: &Filter) -> RenderedView {
    let kept = filter.apply(catalog);

    let mut options = Vec::with_capacity(kept.len() + 1);
    options.push(ActivityOption::placeholder());

    let cards = kept
        .into_iter()
        .map(|(name, activity)| {
            options.push(ActivityOption {
                value: name.to_string(),
                label: name.to_string(),
            });
            Card {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: activity
                    .participants
                    .iter()
                    .map(|email| Participant {
                        activity: name.to_string(),
                        email: email.clone(),
                    })
                    .collect(),
            }
        })
        .collect();

    RenderedView { cards, options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Activity, Category};
    use crate::filter::SortKey;

    fn catalog() -> Catalog {
        [
            (
                "B Club".to_string(),
                Activity {
                    description: "Board games".into(),
                    schedule: "Tuesdays, 3:30 PM - 4:30 PM".into(),
                    max_participants: 10,
                    participants: vec![
                        "ann@school.edu".into(),
                        "bob@school.edu".into(),
                        "cy@school.edu".into(),
                    ],
                },
            ),
            (
                "A Team".to_string(),
                Activity {
                    description: "Track and field".into(),
                    schedule: "Mondays, 4:00 PM - 5:30 PM".into(),
                    max_participants: 20,
                    participants: Vec::new(),
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn availability_text() {
        let view = render(&catalog(), &Filter::default());
        assert_eq!(view.cards[0].availability(), "7 spots left");
        assert_eq!(view.cards[1].availability(), "20 spots left");
    }

    #[test]
    fn participants_carry_activity_for_removal() {
        let view = render(&catalog(), &Filter::default());
        let p = &view.cards[0].participants[1];
        assert_eq!(p.activity, "B Club");
        assert_eq!(p.email, "bob@school.edu");
        assert!(view.cards[1].participants.is_empty());
    }

    #[test]
    fn options_follow_card_order_with_placeholder() {
        let filter = Filter {
            sort: SortKey::Name,
            ..Default::default()
        };
        let view = render(&catalog(), &filter);
        let card_names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(card_names, vec!["A Team", "B Club"]);

        assert!(view.options[0].is_placeholder());
        assert_eq!(view.options[0].label, SELECT_PLACEHOLDER);
        let option_values: Vec<&str> =
            view.options[1..].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(option_values, card_names);
    }

    #[test]
    fn empty_result_keeps_placeholder() {
        let filter = Filter {
            category: Some(Category::Class),
            ..Default::default()
        };
        let view = render(&catalog(), &filter);
        assert!(view.cards.is_empty());
        assert_eq!(view.options, vec![ActivityOption::placeholder()]);
    }

    #[test]
    fn render_is_idempotent() {
        let catalog = catalog();
        for sort in SortKey::ALL {
            let filter = Filter {
                search: "club".into(),
                category: None,
                sort,
            };
            assert_eq!(render(&catalog, &filter), render(&catalog, &filter));
        }
        let empty = Catalog::default();
        assert_eq!(
            render(&empty, &Filter::default()),
            render(&empty, &Filter::default())
        );
    }
}

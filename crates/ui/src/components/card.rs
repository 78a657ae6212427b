use crate::components::Button;
use crate::style;
use dioxus::prelude::*;
use showcase_domain::CardRecord;
use showcase_domain::content::READ_MORE;

/// Image card with a "Read More" button.
#[component]
pub fn Card(
    #[props(into)] title: String,
    #[props(into)] description: String,
    #[props(into)] image_url: String,
) -> Element {
    rsx! {
        div { class: style::CARD, "data-component": "card",
            img { class: style::CARD_IMAGE, src: "{image_url}", alt: "{title}" }
            div { class: style::CARD_BODY,
                h3 { class: style::CARD_TITLE, "{title}" }
                p { class: style::CARD_DESCRIPTION, "{description}" }
                Button { label: READ_MORE, color: "blue" }
            }
        }
    }
}

/// Responsive grid of [`Card`]s keyed by list position.
#[component]
pub fn CardGrid(cards: &'static [CardRecord]) -> Element {
    rsx! {
        div { class: style::GRID,
            for (index, card) in cards.iter().enumerate() {
                Card {
                    key: "{index}",
                    title: card.title,
                    description: card.description,
                    image_url: card.image_url,
                }
            }
        }
    }
}

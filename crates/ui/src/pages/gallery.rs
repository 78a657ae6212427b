use crate::components::{ButtonRow, CardGrid};
use crate::style;
use dioxus::prelude::*;
use showcase_domain::content::{CARDS, SAMPLE_BUTTONS};

/// Card grid above a row of sample buttons.
#[component]
pub fn GalleryPage() -> Element {
    rsx! {
        div { class: style::CONTAINER,
            CardGrid { cards: CARDS }
            ButtonRow { buttons: SAMPLE_BUTTONS }
        }
    }
}

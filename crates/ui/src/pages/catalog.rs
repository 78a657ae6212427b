use crate::components::{CardGrid, Footer, Hero, Navbar};
use crate::style;
use dioxus::prelude::*;
use showcase_domain::content::CARDS;

#[component]
pub fn CatalogPage() -> Element {
    rsx! {
        div { class: style::PAGE,
            Navbar {}
            Hero {}
            main { class: style::CONTAINER,
                CardGrid { cards: CARDS }
            }
            Footer {}
        }
    }
}

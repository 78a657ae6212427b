use crate::components::{FeatureGrid, Footer, Hero, Navbar};
use crate::style;
use dioxus::prelude::*;
use showcase_domain::content::FEATURES;

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        div { class: style::PAGE,
            Navbar {}
            Hero {}
            main { class: "py-12",
                FeatureGrid { features: FEATURES }
            }
            Footer {}
        }
    }
}

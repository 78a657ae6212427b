use crate::style;
use dioxus::prelude::*;
use showcase_domain::FeatureRecord;

#[component]
pub fn FeatureCard(
    #[props(into)] icon: String,
    #[props(into)] title: String,
    #[props(into)] description: String,
) -> Element {
    rsx! {
        div { class: style::FEATURE_CARD, "data-component": "feature-card",
            div { class: style::FEATURE_ICON, "{icon}" }
            h3 { class: style::FEATURE_TITLE, "{title}" }
            p { class: style::FEATURE_DESCRIPTION, "{description}" }
        }
    }
}

/// Responsive grid of [`FeatureCard`]s keyed by list position.
#[component]
pub fn FeatureGrid(features: &'static [FeatureRecord]) -> Element {
    rsx! {
        section { class: style::CONTAINER,
            div { class: style::GRID,
                for (index, feature) in features.iter().enumerate() {
                    FeatureCard {
                        key: "{index}",
                        icon: feature.icon,
                        title: feature.title,
                        description: feature.description,
                    }
                }
            }
        }
    }
}

use crate::components::Button;
use crate::style;
use dioxus::prelude::*;
use showcase_domain::ColorToken;
use showcase_domain::content::BRAND;

/// Static header: brand on the left, sign-in and sign-up buttons on the right.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: style::NAVBAR,
            div { class: style::NAVBAR_INNER,
                span { class: style::BRAND, "{BRAND}" }
                div { class: style::NAV_ACTIONS,
                    Button { label: "Sign In", color: ColorToken::GRAY }
                    Button { label: "Sign Up" }
                }
            }
        }
    }
}

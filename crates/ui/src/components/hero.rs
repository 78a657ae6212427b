use crate::components::Button;
use crate::style;
use dioxus::prelude::*;
use showcase_domain::ColorToken;
use showcase_domain::content::{HERO_ALERT, HERO_CTA, HERO_SUBTITLE, HERO_TITLE};
use tracing::{info, warn};

/// Shows `message` in the host document's modal alert dialog.
pub fn alert(message: &str) {
    match serde_json::to_string(message) {
        Ok(literal) => {
            let _ = document::eval(&format!("alert({literal});"));
        },
        Err(e) => warn!(error = %e, "Failed to encode alert message"),
    }
}

/// Greets the visitor; bound to the hero call-to-action.
pub fn greet() {
    info!("Hero call-to-action activated");
    alert(HERO_ALERT);
}

/// Static banner whose call-to-action greets the visitor.
#[component]
pub fn Hero() -> Element {
    rsx! {
        header { class: style::HERO,
            div { class: style::HERO_INNER,
                h1 { class: style::HERO_TITLE, "{HERO_TITLE}" }
                p { class: style::HERO_SUBTITLE, "{HERO_SUBTITLE}" }
                Button {
                    label: HERO_CTA,
                    color: ColorToken::GREEN,
                    on_activate: move |()| greet(),
                }
            }
        }
    }
}

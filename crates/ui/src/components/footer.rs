use crate::style;
use dioxus::prelude::*;
use showcase_domain::content::FOOTER_NOTE;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: style::FOOTER, "{FOOTER_NOTE}" }
    }
}

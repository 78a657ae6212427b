use crate::style;
use dioxus::prelude::*;
use showcase_domain::ColorToken;

/// Runs the activation handler once, if there is one.
pub fn activate(handler: Option<&EventHandler>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}

/// A clickable label. Styling depends on `color` alone; without `on_activate` a click does nothing.
#[component]
pub fn Button(
    #[props(into)] label: String,
    #[props(default, into)] color: ColorToken,
    on_activate: Option<EventHandler>,
) -> Element {
    let classes = style::button_classes(&color);

    rsx! {
        button {
            r#type: "button",
            class: "{classes}",
            onclick: move |_| activate(on_activate.as_ref()),
            "{label}"
        }
    }
}

/// The sample row of differently colored buttons.
#[component]
pub fn ButtonRow(buttons: &'static [(&'static str, ColorToken)]) -> Element {
    rsx! {
        div { class: style::BUTTON_ROW,
            for (index, (label, color)) in buttons.iter().enumerate() {
                Button { key: "{index}", label: *label, color: color.clone() }
            }
        }
    }
}

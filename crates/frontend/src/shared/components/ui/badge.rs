use leptos::prelude::*;

use crate::shared::crud::view::Tone;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Colour of the badge
    #[prop(optional)]
    tone: Option<Tone>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant = tone.unwrap_or(Tone::Neutral).variant();

    view! {
        <span class=format!("badge badge--{}", variant)>
            {children()}
        </span>
    }
}

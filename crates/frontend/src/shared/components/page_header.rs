use leptos::prelude::*;

/// PageHeader component - header of every resource page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <span class="page__subtitle">{s}</span>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}

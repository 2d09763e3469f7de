use leptos::prelude::*;

use crate::shared::crud::form::{FieldKind, FieldSpec, SelectOption};

/// One labelled input or select of a generated form, with its inline error
#[component]
pub fn FormField(
    spec: FieldSpec,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Options of a lookup field
    #[prop(optional, into)]
    lookup_options: Signal<Vec<SelectOption>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let field_id = format!("field-{}", spec.key);
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };
    let placeholder = spec.placeholder;
    let input_type = if matches!(spec.kind, FieldKind::Number) {
        "number"
    } else {
        "text"
    };

    let control = match spec.kind {
        FieldKind::Text | FieldKind::Number => {
            view! {
                <input
                    id=field_id.clone()
                    class="form__input"
                    type=input_type
                    prop:value=move || value.get()
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
        FieldKind::Select(options) => {
            let options = Signal::derive(move || options.clone());
            select_view(field_id.clone(), value, options, on_change, disabled)
        }
        FieldKind::Lookup { empty, .. } => {
            let options = Signal::derive(move || {
                let mut options = Vec::new();
                if let Some(empty) = empty {
                    options.push(SelectOption::new("", empty));
                } else {
                    options.push(SelectOption::new("", "Seleccione..."));
                }
                options.extend(lookup_options.get());
                options
            });
            select_view(field_id.clone(), value, options, on_change, disabled)
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=field_id>{label}</label>
            {control}
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}

fn select_view(
    id: String,
    value: Signal<String>,
    options: Signal<Vec<SelectOption>>,
    on_change: Callback<String>,
    disabled: Signal<bool>,
) -> AnyView {
    view! {
        <select
            id=id
            class="form__select"
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let selected = option.value == current;
                        view! {
                            <option value=option.value selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
    .into_any()
}

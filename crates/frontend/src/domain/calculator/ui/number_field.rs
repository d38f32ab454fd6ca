use crate::domain::calculator::constraints::{validate, FieldConstraint, ValidationStatus};
use crate::shared::format::strip_leading_zeros;
use leptos::prelude::*;

/// Numeric form field with inline validation feedback.
///
/// Validation is a pure recomputation over the current text; this component
/// only applies the outcome: Bootstrap validity classes on the input and at
/// most one feedback element directly after it. An empty field stays neutral.
#[component]
pub fn NumberField(
    /// Static constraint describing the field
    constraint: &'static FieldConstraint,
    /// The field's raw text, owned by the form
    value: RwSignal<String>,
) -> impl IntoView {
    let result = Memo::new(move |_| validate(&value.get(), constraint));

    let input_class = move || match result.get().status {
        ValidationStatus::Valid => "form-control is-valid",
        ValidationStatus::Empty => "form-control",
        _ => "form-control is-invalid",
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for=constraint.name>
                {constraint.label}
            </label>
            <input
                id=constraint.name
                name=constraint.name
                type="number"
                step="any"
                class=input_class
                placeholder=constraint.placeholder
                min=constraint.min.map(|v| v.to_string())
                max=constraint.max.map(|v| v.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(strip_leading_zeros(&event_target_value(&ev)));
                }
            />
            {move || {
                result
                    .get()
                    .message
                    .map(|message| view! { <div class="invalid-feedback">{message}</div> })
            }}
        </div>
    }
}

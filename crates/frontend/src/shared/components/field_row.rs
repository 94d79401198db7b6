use leptos::prelude::*;

/// Label/value row for detail tables. Empty values render as a dash.
#[component]
pub fn FieldRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.trim().is_empty() {
        "—".to_string()
    } else {
        value
    };
    view! {
        <tr class="field-row">
            <td class="field-row__label">{label}</td>
            <td class="field-row__value">{value}</td>
        </tr>
    }
}

use crate::shared::components::table::format_money;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card with an icon, a label and a money value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None renders a dash (not loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// "success", "warning", "error" or empty
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let card_class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", tone)
    };

    let formatted = move || match value.get() {
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

use leptos::prelude::*;

/// Строка итогов для таблиц.
///
/// Renders a `<tr class="table__totals-row">` around the given cells. Place it
/// as the last row of the table body:
///
/// ```ignore
/// <TableTotalsRow>
///     <td>{format!("Records: {}", totals.count)}</td>
///     <td class="table__cell--right">{format_money(totals.amount)}</td>
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(
    children: Children,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class=row_class>
            {children()}
        </tr>
    }
}

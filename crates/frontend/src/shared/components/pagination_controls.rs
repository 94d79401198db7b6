use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Pager for client-side paginated tables. Pages are zero-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec());
    let last_page = move || total_pages.get().max(1) - 1;
    let at_start = Signal::derive(move || current_page.get() == 0);
    let at_end = Signal::derive(move || current_page.get() >= last_page());

    let go = move |page: usize| {
        let page = page.min(last_page());
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    // The select keeps its own string value; numeric changes are forwarded.
    let size_value = RwSignal::new(page_size.get_untracked().to_string());
    Effect::new(move |_| {
        if let Ok(size) = size_value.get().parse::<usize>() {
            if size != page_size.get_untracked() {
                on_page_size_change.run(size);
            }
        }
    });

    view! {
        <div class="pagination-controls">
            <Button appearance=ButtonAppearance::Subtle disabled=at_start on_click=move |_| go(0)>
                {icon("chevrons-left")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=at_start
                on_click=move |_| go(current_page.get_untracked().saturating_sub(1))
            >
                {icon("chevron-left")}
            </Button>
            <span class="pagination-controls__info">
                {move || {
                    format!(
                        "Page {} of {} · {} rows",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=at_end
                on_click=move |_| go(current_page.get_untracked() + 1)
            >
                {icon("chevron-right")}
            </Button>
            <Button appearance=ButtonAppearance::Subtle disabled=at_end on_click=move |_| go(last_page())>
                {icon("chevrons-right")}
            </Button>
            <Select value=size_value>
                {sizes
                    .into_iter()
                    .map(|size| view! { <option value=size.to_string()>{format!("{} / page", size)}</option> })
                    .collect_view()}
            </Select>
        </div>
    }
}

/// Универсальные утилиты для работы со списками (поиск, сортировка, страницы)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Minimum query length before a text filter is applied.
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// True once the query is long enough to filter on.
pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if !is_filter_active(filter) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    // Lowercasing can change byte lengths for some scripts; fall back to plain text then.
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="table__highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу (запрос короче 3 символов не фильтрует)
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Number of pages for `count` rows, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Rows of the zero-based `page`. Out of range pages are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if page_size == 0 || start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Compares optional values, `None` last.
pub fn cmp_opt<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Dialog callback that re-reads the list after a successful write.
/// The record echoed by the server is dropped in favour of a fresh fetch.
pub fn reload_after<T: 'static>(load: impl Fn() + Send + Sync + 'static) -> Callback<T> {
    Callback::new(move |_: T| load())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "amount" => cmp_f64(self.amount, other.amount),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.trim().to_lowercase())
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Rao", amount: 20.0 },
            Row { name: "Ahmed", amount: 5.5 },
            Row { name: "Mehta", amount: 12.0 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Ahmed");
        sort_list(&mut items, "amount", false);
        let amounts: Vec<f64> = items.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![20.0, 12.0, 5.5]);
    }

    #[test]
    fn test_filter_requires_three_chars() {
        assert_eq!(filter_list(rows(), "ra").len(), 3);
        assert_eq!(filter_list(rows(), "  ah ").len(), 3);
        let hits = filter_list(rows(), "meh");
        assert_eq!(hits, vec![Row { name: "Mehta", amount: 12.0 }]);
        assert!(filter_list(rows(), "zzz").is_empty());
    }

    #[test]
    fn test_pagination() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(page_slice(&items, 0, 3), vec![0, 1, 2]);
        assert_eq!(page_slice(&items, 2, 3), vec![6]);
        assert!(page_slice(&items, 3, 3).is_empty());
    }

    #[test]
    fn test_cmp_opt_puts_none_last() {
        let mut v = vec![None, Some("b"), Some("a")];
        v.sort_by(cmp_opt);
        assert_eq!(v, vec![Some("a"), Some("b"), None]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("amount", "name", true), " ⇅");
    }

    #[test]
    fn test_reload_after_runs_load_per_write() {
        let owner = Owner::new();
        owner.with(|| {
            let loads = Arc::new(AtomicUsize::new(0));
            let counter = loads.clone();
            let on_saved = reload_after::<String>(move || {
                counter.fetch_add(1, AtomicOrdering::SeqCst);
            });
            on_saved.run("created".to_string());
            on_saved.run("approved".to_string());
            assert_eq!(loads.load(AtomicOrdering::SeqCst), 2);
        });
    }
}

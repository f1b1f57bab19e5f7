//! Sortable text table shared by list-style pages.
//!
//! Cells are pre-formatted strings. Clicking a header sorts by that column;
//! clicking it again flips the direction. Columns whose cells all parse as
//! numbers sort numerically.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::cmp::Ordering;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub ascending: bool,
}

impl SortKey {
    /// Next sort key after a click on `column`.
    pub fn toggle(current: Option<SortKey>, column: usize) -> SortKey {
        match current {
            Some(key) if key.column == column => SortKey { column, ascending: !key.ascending },
            _ => SortKey { column, ascending: true },
        }
    }
}

/// Stable sort of `rows` by one column. Rows missing the column sort last.
pub fn sort_rows(rows: &mut [Vec<String>], key: SortKey) {
    let numeric = rows
        .iter()
        .filter_map(|row| row.get(key.column))
        .all(|cell| cell.parse::<f64>().is_ok());

    rows.sort_by(|a, b| {
        let ordering = match (a.get(key.column), b.get(key.column)) {
            (Some(x), Some(y)) if numeric => compare_numeric(x, y),
            (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        };
        if key.ascending { ordering } else { ordering.reverse() }
    });
}

fn compare_numeric(x: &str, y: &str) -> Ordering {
    let x = x.parse::<f64>().unwrap_or_default();
    let y = y.parse::<f64>().unwrap_or_default();
    x.total_cmp(&y)
}

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] rows: Signal<Vec<Vec<String>>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    let sort = RwSignal::new(None::<SortKey>);

    let sorted_rows = move || {
        let mut rows = rows.get();
        if let Some(key) = sort.get() {
            sort_rows(&mut rows, key);
        }
        rows
    };

    let indicator = move |column: usize| match sort.get() {
        Some(SortKey { column: c, ascending: true }) if c == column => " ▲",
        Some(SortKey { column: c, ascending: false }) if c == column => " ▼",
        _ => "",
    };

    let empty_text = empty_text.unwrap_or_else(|| "No data".to_owned());

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers
                        .iter()
                        .enumerate()
                        .map(|(column, header)| {
                            view! {
                                <th
                                    class="data-table__header"
                                    on:click=move |_| sort.update(|s| *s = Some(SortKey::toggle(*s, column)))
                                >
                                    {*header}
                                    {move || indicator(column)}
                                </th>
                            }
                        })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <tr>
                                <td class="data-table__empty" colspan={headers.len().to_string()}>
                                    {empty_text.clone()}
                                </td>
                            </tr>
                        }
                    }
                >
                    {move || {
                        sorted_rows()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </tbody>
        </table>
    }
}

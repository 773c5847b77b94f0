//! Filterable, sortable, paginated table

use dcc_common::{visible_rows, SortOrder, TableOptions, TableProps};
use dioxus::prelude::*;

/// Table over string cells using the dashboard's shared [`TableOptions`].
///
/// The filter box only appears once the table has enough rows. Clicking a
/// header sorts by that column; clicking it again reverses the order.
#[component]
pub fn DataTable(columns: Vec<&'static str>, rows: Vec<Vec<String>>) -> Element {
    let options = TableOptions::default();
    let table_props = TableProps::default();

    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 0usize);
    let mut sort = use_signal(move || (0usize, options.default_sort_order));

    let visible = visible_rows(&rows, &query.read(), Some(*sort.read()));
    let total = visible.len();
    let page_count = options.page_count(total);
    let current_page = page().min(page_count - 1);
    let (start, to) = options.page_bounds(current_page, total);
    let page_rows: Vec<(usize, Vec<String>)> = visible
        .into_iter()
        .enumerate()
        .skip(start)
        .take(to + 1 - start)
        .collect();
    let footer = options.footer(current_page, total);
    let show_search = options.should_show_search(rows.len());
    let (sort_column, sort_order) = *sort.read();

    rsx! {
        div { class: "data-table",
            if show_search {
                input {
                    r#type: "search",
                    class: "mb-2 px-3 py-1.5 border border-gray-300 rounded text-sm",
                    placeholder: "{table_props.search_placeholder}",
                    value: "{query}",
                    oninput: move |e| {
                        query.set(e.value());
                        page.set(0);
                    },
                }
            }
            table { class: "w-full text-sm border-collapse",
                thead {
                    tr {
                        for (index, column) in columns.iter().enumerate() {
                            th {
                                key: "{column}",
                                class: "text-left px-2 py-1 border-b cursor-pointer select-none",
                                onclick: move |_| {
                                    let (current, order) = *sort.read();
                                    let next = if current == index {
                                        match order {
                                            SortOrder::Asc => SortOrder::Desc,
                                            SortOrder::Desc => SortOrder::Asc,
                                        }
                                    } else {
                                        SortOrder::Asc
                                    };
                                    sort.set((index, next));
                                },
                                "{column}"
                                if index == sort_column {
                                    span { class: "ml-1 text-gray-400",
                                        if sort_order == SortOrder::Asc { "▲" } else { "▼" }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (position, row) in page_rows {
                        tr { key: "{position}", class: "border-b",
                            for cell in row {
                                td { class: "px-2 py-1", "{cell}" }
                            }
                        }
                    }
                }
            }
            if page_count > 1 {
                div { class: "flex items-center gap-2 mt-2 text-sm",
                    button {
                        class: "px-2 py-1 border rounded disabled:opacity-50",
                        disabled: current_page == 0,
                        onclick: move |_| page.set(current_page.saturating_sub(1)),
                        "Previous"
                    }
                    span { "{current_page + 1} / {page_count}" }
                    button {
                        class: "px-2 py-1 border rounded disabled:opacity-50",
                        disabled: current_page + 1 >= page_count,
                        onclick: move |_| page.set(current_page + 1),
                        "Next"
                    }
                }
            }
            if let Some(footer) = footer {
                p { class: "mt-1 text-xs text-gray-500", "{footer}" }
            }
        }
    }
}

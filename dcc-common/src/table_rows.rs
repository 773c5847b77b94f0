use crate::table_options::SortOrder;

/// Rows left after filtering by `query` and sorting by `sort`.
///
/// A row matches when any cell contains the query, ignoring case. Sorting is
/// stable, so rows with equal keys keep their server order.
pub fn visible_rows(
    rows: &[Vec<String>],
    query: &str,
    sort: Option<(usize, SortOrder)>,
) -> Vec<Vec<String>> {
    let query = query.trim().to_lowercase();
    let mut visible: Vec<Vec<String>> = rows
        .iter()
        .filter(|row| query.is_empty() || row.iter().any(|cell| cell.to_lowercase().contains(&query)))
        .cloned()
        .collect();

    if let Some((column, order)) = sort {
        visible.sort_by(|a, b| {
            let ordering = a.get(column).cmp(&b.get(column));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }
    visible
}

/// Suggest the name of the release that follows `current`.
///
/// Increments the trailing number and keeps its zero padding:
/// `ICGC22` -> `ICGC23`, `release09` -> `release10`. Returns `None` when the
/// name does not end in a number.
pub fn suggest_next_release_name(current: &str) -> Option<String> {
    let current = current.trim();
    let digits_start = current
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;

    let (prefix, digits) = current.split_at(digits_start);
    let next = digits.parse::<u64>().ok()?.checked_add(1)?;
    Some(format!("{prefix}{next:0width$}", width = digits.len()))
}

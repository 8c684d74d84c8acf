// Output formatting: terminal display of match reports.

pub mod terminal;

/// Join up to `limit` items with ", ", appending "(+N more)" when items are left out.
///
/// A `limit` of 0 shows everything.
pub fn join_limited<'a, I>(items: I, limit: usize) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let items: Vec<&str> = items.into_iter().map(String::as_str).collect();
    if limit == 0 || items.len() <= limit {
        return items.join(", ");
    }
    let hidden = items.len() - limit;
    format!("{} (+{hidden} more)", items[..limit].join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_limited() {
        let items = words(&["go", "java", "rust"]);
        assert_eq!(join_limited(&items, 0), "go, java, rust");
        assert_eq!(join_limited(&items, 3), "go, java, rust");
        assert_eq!(join_limited(&items, 2), "go, java (+1 more)");
        assert_eq!(join_limited(&Vec::<String>::new(), 5), "");
    }
}

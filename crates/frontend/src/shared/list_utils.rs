//! List helpers shared by the entity grids (sorting, header indicators).

use std::cmp::Ordering;

/// Types sortable by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts a list in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a header cell.
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
        "table__sort table__sort--active"
    } else {
        "table__sort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        count: i32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "count" => self.count.cmp(&other.count),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "b", count: 2 },
            Row { name: "a", count: 3 },
            Row { name: "c", count: 1 },
        ]
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(
            items.iter().map(|r| r.name).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
        sort_list(&mut items, "count", false);
        assert_eq!(items.iter().map(|r| r.count).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn unknown_field_keeps_the_current_order() {
        let mut items = rows();
        sort_list(&mut items, "nope", true);
        assert_eq!(
            items.iter().map(|r| r.name).collect::<Vec<_>>(),
            ["b", "a", "c"]
        );
    }

    #[test]
    fn indicator_follows_the_active_field() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "count", true), " ⇅");
    }
}

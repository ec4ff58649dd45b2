//! A sortable, paginated grid over any record collection.
//!
//! Each table instance owns its sort and page state. Sorting is single-column
//! and stable; pagination slices the sorted sequence into fixed-size pages.

use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A single cell value as seen by the sort comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Text compares by collation order: base letters first (accents and
    /// case ignored), then accents, then case. Numbers compare numerically.
    /// Any other pairing compares equal.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => primary_key(a)
                .cmp(&primary_key(b))
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| a.cmp(b)),
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// Lower-cased base letters with diacritics stripped, so "Södertälje"
/// sorts next to "Sodertalje" rather than after "z".
fn primary_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

/// A record that can be shown in a `DataTable`.
pub trait TableRow {
    /// A stable identifier, unique within the collection.
    fn row_id(&self) -> &str;

    /// The value of the column identified by `key`.
    fn cell(&self, key: &str) -> CellValue;
}

pub struct Column<R> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Overrides the default cell text.
    pub render: Option<fn(&R) -> String>,
}

impl<R> Column<R> {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: fn(&R) -> String) -> Self {
        self.render = Some(render);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
}

/// A serializable snapshot of the visible page of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    /// `false` when everything fits on one page.
    pub show_pagination: bool,
    /// Set only when the table has no rows at all.
    pub empty_message: Option<String>,
}

pub struct DataTable<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    sort: Option<(String, SortDirection)>,
    page: usize,
    page_size: usize,
    empty_message: String,
}

impl<R: TableRow> DataTable<R> {
    /// A `page_size` of zero is treated as one.
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>, page_size: usize) -> Self {
        Self {
            rows,
            columns,
            sort: None,
            page: 0,
            page_size: page_size.max(1),
            empty_message: "No records found.".to_string(),
        }
    }

    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|(key, dir)| (key.as_str(), *dir))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// Same column flips direction; a different column starts ascending.
    ///
    /// Unknown and non-sortable columns are ignored. Returns `true` if the
    /// sort changed, in which case the table goes back to the first page.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            tracing::debug!("Ignoring sort request for non-sortable column {:?}", key);
            return false;
        }

        self.sort = match self.sort.take() {
            Some((current, dir)) if current == key => Some((current, dir.flipped())),
            _ => Some((key.to_string(), SortDirection::Asc)),
        };
        self.page = 0;
        true
    }

    /// Moves to page `page`. Any index is accepted; an out-of-range page
    /// simply shows no rows.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Replaces the underlying records.
    ///
    /// If the current page no longer exists it is pulled back to the last
    /// page that does.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let last = self.total_pages().saturating_sub(1);
        if self.page > last {
            tracing::debug!("Clamping table page {} to {}", self.page, last);
            self.page = last;
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn sorted_rows(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self.rows.iter().collect();
        if let Some((key, dir)) = &self.sort {
            rows.sort_by(|a, b| {
                let ord = a.cell(key).compare(&b.cell(key));
                match dir {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        rows
    }

    pub fn page_rows(&self) -> Vec<&R> {
        let start = self.page.saturating_mul(self.page_size);
        self.sorted_rows()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    fn render_cell(column: &Column<R>, row: &R) -> String {
        match column.render {
            Some(render) => render(row),
            None => row.cell(&column.key).display(),
        }
    }

    pub fn page_view(&self) -> TablePage {
        let total_rows = self.total_rows();
        let total_pages = self.total_pages();

        TablePage {
            columns: self
                .columns
                .iter()
                .map(|c| ColumnView {
                    key: c.key.clone(),
                    label: c.label.clone(),
                    sortable: c.sortable,
                    sort_direction: self
                        .sort
                        .as_ref()
                        .filter(|(key, _)| *key == c.key)
                        .map(|(_, dir)| *dir),
                })
                .collect(),
            rows: self
                .page_rows()
                .into_iter()
                .map(|row| RowView {
                    id: row.row_id().to_string(),
                    cells: self
                        .columns
                        .iter()
                        .map(|c| Self::render_cell(c, row))
                        .collect(),
                })
                .collect(),
            page: self.page,
            total_pages,
            total_rows,
            show_pagination: total_pages > 1,
            empty_message: (total_rows == 0).then(|| self.empty_message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Person {
        id: String,
        name: String,
        age: u32,
    }

    impl TableRow for Person {
        fn row_id(&self) -> &str {
            &self.id
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.as_str().into(),
                "age" => self.age.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn person(id: usize, name: &str, age: u32) -> Person {
        Person {
            id: format!("p{id}"),
            name: name.to_string(),
            age,
        }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age")
                .sortable()
                .render(|p| format!("{} years", p.age)),
            Column::new("notes", "Notes"),
        ]
    }

    fn people(n: usize) -> Vec<Person> {
        (0..n).map(|i| person(i, &format!("Person {i:02}"), 20 + i as u32)).collect()
    }

    fn names<'a>(rows: &[&'a Person]) -> Vec<&'a str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_pagination_slices_23_rows_into_3_pages() {
        let mut table = DataTable::new(people(23), columns(), 10);
        assert_eq!(table.total_pages(), 3);
        table.go_to_page(2);
        assert_eq!(table.page_rows().len(), 3);
        assert!(table.page_view().show_pagination);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_a_panic() {
        let mut table = DataTable::new(people(5), columns(), 10);
        table.go_to_page(7);
        assert_eq!(table.page(), 7);
        assert!(table.page_rows().is_empty());
        table.go_to_page(usize::MAX);
        assert!(table.page_rows().is_empty());
    }

    #[test]
    fn test_toggle_sort_same_column_flips_then_returns_to_asc() {
        let rows = vec![person(0, "bea", 30), person(1, "Adam", 25), person(2, "carl", 40)];
        let mut table = DataTable::new(rows, columns(), 10);

        assert!(table.toggle_sort("name"));
        assert_eq!(names(&table.sorted_rows()), ["Adam", "bea", "carl"]);
        assert!(table.toggle_sort("name"));
        assert_eq!(table.sort(), Some(("name", SortDirection::Desc)));
        assert_eq!(names(&table.sorted_rows()), ["carl", "bea", "Adam"]);
        assert!(table.toggle_sort("name"));
        assert_eq!(names(&table.sorted_rows()), ["Adam", "bea", "carl"]);
    }

    #[test]
    fn test_toggle_sort_other_column_resets_to_asc() {
        let rows = vec![person(0, "bea", 30), person(1, "Adam", 25), person(2, "carl", 40)];
        let mut table = DataTable::new(rows, columns(), 10);
        table.toggle_sort("name");
        table.toggle_sort("name");
        table.toggle_sort("age");
        assert_eq!(table.sort(), Some(("age", SortDirection::Asc)));
        assert_eq!(names(&table.sorted_rows()), ["Adam", "bea", "carl"]);
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let rows = vec![person(0, "a", 100), person(1, "b", 9), person(2, "c", 25)];
        let mut table = DataTable::new(rows, columns(), 10);
        table.toggle_sort("age");
        assert_eq!(names(&table.sorted_rows()), ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let rows = vec![
            person(0, "same", 1),
            person(1, "Same", 2),
            person(2, "other", 3),
            person(3, "same", 4),
        ];
        let mut table = DataTable::new(rows, columns(), 10);
        table.toggle_sort("name");
        let ids: Vec<&str> = table.sorted_rows().iter().map(|p| p.row_id()).collect();
        assert_eq!(ids, ["p2", "p1", "p0", "p3"]);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letters() {
        let rows = vec![
            person(0, "Västerås", 1),
            person(1, "Stockholm", 2),
            person(2, "Borås", 3),
            person(3, "Älmhult", 4),
            person(4, "Södertälje", 5),
            person(5, "Malmö", 6),
        ];
        let mut table = DataTable::new(rows, columns(), 10);
        table.toggle_sort("name");
        assert_eq!(
            names(&table.sorted_rows()),
            ["Älmhult", "Borås", "Malmö", "Södertälje", "Stockholm", "Västerås"]
        );
    }

    #[test]
    fn test_accents_break_ties_before_case() {
        let cell = |s: &str| CellValue::from(s);
        assert_eq!(cell("Sodertalje").compare(&cell("Södertälje")), Ordering::Less);
        assert_eq!(cell("resume").compare(&cell("Résumé")), Ordering::Less);
        assert_eq!(cell("Same").compare(&cell("same")), Ordering::Less);
        assert_eq!(cell("same").compare(&cell("same")), Ordering::Equal);
    }

    #[test]
    fn test_non_sortable_and_unknown_columns_are_ignored() {
        let mut table = DataTable::new(people(3), columns(), 10);
        table.go_to_page(1);
        assert!(!table.toggle_sort("notes"));
        assert!(!table.toggle_sort("missing"));
        assert_eq!(table.sort(), None);
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_sort_change_returns_to_first_page() {
        let mut table = DataTable::new(people(23), columns(), 10);
        table.go_to_page(2);
        table.toggle_sort("age");
        assert_eq!(table.page(), 0);
    }

    #[test]
    fn test_set_rows_clamps_page_when_data_shrinks() {
        let mut table = DataTable::new(people(23), columns(), 10);
        table.go_to_page(2);
        table.set_rows(people(12));
        assert_eq!(table.page(), 1);
        assert_eq!(table.page_rows().len(), 2);

        table.set_rows(Vec::new());
        assert_eq!(table.page(), 0);
    }

    #[test]
    fn test_empty_table_shows_message_and_no_pagination() {
        let table = DataTable::new(Vec::<Person>::new(), columns(), 10)
            .with_empty_message("Nobody here yet.");
        let view = table.page_view();
        assert_eq!(view.total_pages, 0);
        assert!(!view.show_pagination);
        assert_eq!(view.empty_message.as_deref(), Some("Nobody here yet."));
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_single_page_hides_pagination() {
        let view = DataTable::new(people(10), columns(), 10).page_view();
        assert_eq!(view.total_pages, 1);
        assert!(!view.show_pagination);
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let table = DataTable::new(people(3), columns(), 0);
        assert_eq!(table.page_size(), 1);
        assert_eq!(table.total_pages(), 3);
    }

    #[test]
    fn test_page_view_renders_cells_and_sort_marker() {
        let rows = vec![person(0, "bea", 30), person(1, "Adam", 25)];
        let mut table = DataTable::new(rows, columns(), 10);
        table.toggle_sort("age");
        let view = table.page_view();

        let rendered = view
            .rows
            .iter()
            .map(|r| format!("{} | {}", r.id, r.cells.join(" | ")).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
        p1 | Adam | 25 years |
        p0 | bea | 30 years |
        ");
        assert_eq!(view.columns[1].sort_direction, Some(SortDirection::Asc));
        assert_eq!(view.columns[0].sort_direction, None);
    }

    #[test]
    fn test_mixed_cell_types_compare_equal() {
        assert_eq!(
            CellValue::Text("a".into()).compare(&CellValue::Number(1.0)),
            Ordering::Equal
        );
        assert_eq!(CellValue::Empty.compare(&CellValue::Empty), Ordering::Equal);
        assert_eq!(
            CellValue::Number(f64::NAN).compare(&CellValue::Number(1.0)),
            Ordering::Equal
        );
    }
}

//! Column layouts for the admin back-office tables.

use serde::Deserialize;

use crate::config::AppConfig;
use crate::core::{Catalog, Column, DataTable, Listing, ListingKind, Organization};

/// Identifies one of the admin tables in IPC payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdminTable {
    Organizations,
    Listings,
}

fn organization_columns() -> Vec<Column<Organization>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("industry", "Industry").sortable(),
        Column::new("city", "City").sortable(),
        Column::new("employees", "Employees").sortable(),
        Column::new("openPositions", "Open positions")
            .sortable()
            .render(|o| match o.open_positions {
                0 => "None".to_string(),
                n => n.to_string(),
            }),
    ]
}

fn listing_columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("title", "Title").sortable(),
        Column::new("kind", "Type"),
        Column::new("organization", "Organization").sortable(),
        Column::new("location", "Location").sortable(),
        Column::new("postedAt", "Posted")
            .sortable()
            .render(|l| l.posted_at.format("%Y-%m-%d").to_string()),
    ]
}

pub fn organizations_table(catalog: &Catalog, config: &AppConfig) -> DataTable<Organization> {
    DataTable::new(
        catalog.organizations.clone(),
        organization_columns(),
        config.admin_page_size,
    )
    .with_empty_message(&config.empty_table_message)
}

/// Every listing of every kind, in catalog order (theses, internships, ideas).
pub fn listings_table(catalog: &Catalog, config: &AppConfig) -> DataTable<Listing> {
    let rows = ListingKind::ALL
        .iter()
        .flat_map(|kind| catalog.listings(*kind).iter().cloned())
        .collect();
    DataTable::new(rows, listing_columns(), config.admin_page_size)
        .with_empty_message(&config.empty_table_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SortDirection;

    #[test]
    fn test_listings_table_spans_all_kinds() {
        let table = listings_table(&Catalog::sample(), &AppConfig::default());
        assert_eq!(table.total_rows(), 17);
        assert_eq!(table.total_pages(), 2);
    }

    #[test]
    fn test_organizations_sort_by_employees_descending() {
        let mut table = organizations_table(&Catalog::sample(), &AppConfig::default());
        table.toggle_sort("employees");
        table.toggle_sort("employees");
        assert_eq!(table.sort(), Some(("employees", SortDirection::Desc)));
        let first = table.page_rows()[0];
        assert_eq!(first.name, "ABB");
    }

    #[test]
    fn test_posted_column_sorts_chronologically_and_renders_dates() {
        let mut table = listings_table(&Catalog::sample(), &AppConfig::default());
        table.toggle_sort("postedAt");
        let view = table.page_view();
        assert_eq!(view.rows[0].id, "i-001");
        assert_eq!(view.rows[0].cells[4], "2024-07-01");
    }

    #[test]
    fn test_kind_column_is_not_sortable() {
        let mut table = listings_table(&Catalog::sample(), &AppConfig::default());
        assert!(!table.toggle_sort("kind"));
    }

    #[test]
    fn test_empty_catalog_uses_configured_message() {
        let config = AppConfig {
            empty_table_message: "Nothing to administer.".to_string(),
            ..Default::default()
        };
        let view = organizations_table(&Catalog::default(), &config).page_view();
        assert_eq!(view.empty_message.as_deref(), Some("Nothing to administer."));
    }

    #[test]
    fn test_admin_table_deserializes_camel_case() {
        let table: AdminTable = serde_json::from_str("\"organizations\"").unwrap();
        assert_eq!(table, AdminTable::Organizations);
    }
}

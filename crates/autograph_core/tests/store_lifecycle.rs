use autograph_core::{
    init_logging, logging_status, open_store, open_store_from_path, open_store_with,
    CustomerStatus, DashboardService, LoggingConfig, NewCustomer, NewOrder, OrderStatus, Seed,
    SeedSource, StoreError, TableId,
};
use std::collections::BTreeMap;

#[test]
fn seeded_store_has_bundled_catalog() {
    let store = open_store().unwrap();
    let expected = [
        (TableId::Products, 4),
        (TableId::Orders, 4),
        (TableId::Auctions, 3),
        (TableId::Vouchers, 2),
        (TableId::Users, 2),
        (TableId::Customers, 4),
        (TableId::Articles, 2),
        (TableId::Affiliates, 2),
    ];
    for (table, rows) in expected {
        assert_eq!(store.len(table), rows, "table {table}");
    }
    assert!(!store.is_empty());
}

#[test]
fn empty_source_opens_empty_tables() {
    let store = open_store_with(&SeedSource::Empty).unwrap();
    assert!(store.is_empty());
}

#[test]
fn reset_returns_to_seed_baseline() {
    let store = open_store().unwrap();
    let baseline = store.snapshot();

    store
        .customers()
        .create(NewCustomer::new("Vy", "vy@example.com", "0907777777"))
        .unwrap();
    assert!(store.products().delete("prod-001"));
    assert_ne!(store.snapshot(), baseline);

    store.reset();
    assert_eq!(store.snapshot(), baseline);
}

#[test]
fn restore_replaces_every_table() {
    let store = open_store().unwrap();
    let saved = store.snapshot();

    store.orders().bulk_delete(["ord-001", "ord-002"]);
    assert_eq!(store.len(TableId::Orders), 2);

    store.restore(saved.clone()).unwrap();
    assert_eq!(store.snapshot(), saved);
}

#[test]
fn invalid_restore_leaves_tables_unchanged() {
    let store = open_store().unwrap();
    let before = store.snapshot();

    let mut broken = before.clone();
    broken.products.clear();
    let duplicate = broken.customers[0].clone();
    broken.customers.push(duplicate);

    let err = store.restore(broken).unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateId { table: TableId::Customers, ref id } if id == "cust-001"
    ));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn ids_are_not_reissued_after_reset() {
    let store = open_store().unwrap();
    let created = store
        .customers()
        .create(NewCustomer::new("Bao", "bao@example.com", "0908888888"))
        .unwrap();

    store.reset();
    assert!(store.customers().get_by_id(&created.meta.id).is_none());

    for round in 0..20 {
        let next = store
            .customers()
            .create(NewCustomer::new(
                format!("Repeat {round}"),
                format!("r{round}@example.com"),
                "0900000000",
            ))
            .unwrap();
        assert_ne!(next.meta.id, created.meta.id);
    }
}

#[test]
fn opens_seed_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");

    let source = open_store().unwrap();
    source.products().delete("prod-004");
    std::fs::write(&path, source.snapshot().to_json_pretty().unwrap()).unwrap();

    let store = open_store_from_path(&path).unwrap();
    assert_eq!(store.len(TableId::Products), 3);
    assert_eq!(store.snapshot(), source.snapshot());

    store.products().delete("prod-001");
    store.reset();
    assert_eq!(store.len(TableId::Products), 3);
}

#[test]
fn partial_seed_file_leaves_other_tables_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(
        &path,
        r#"{"users": [{"id": "usr-9", "createdAt": "2024-02-01T08:00:00Z",
            "updatedAt": "2024-02-01T08:00:00Z", "name": "Ops",
            "email": "ops@example.com", "role": "admin"}]}"#,
    )
    .unwrap();

    let store = open_store_from_path(&path).unwrap();
    assert_eq!(store.len(TableId::Users), 1);
    assert_eq!(store.len(TableId::Products), 0);
    assert!(store.users().exists("usr-9"));
}

#[test]
fn missing_seed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_store_from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_seed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = open_store_from_path(&path).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn seed_with_invalid_row_is_rejected() {
    let mut seed = Seed::embedded().unwrap();
    seed.customers[0].status = CustomerStatus::Banned;

    let err = autograph_core::Store::from_seed(seed).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidRecord { table: TableId::Customers, .. }
    ));
}

#[test]
fn dashboard_overview_on_seed() {
    let store = open_store().unwrap();
    let overview = DashboardService::new(&store).overview();

    assert_eq!(overview.active_products, 2);
    assert_eq!(overview.pending_orders, 1);
    assert_eq!(overview.delivered_revenue, 1250.0);
    assert_eq!(overview.live_auctions, 1);
    assert_eq!(overview.banned_customers, 1);

    let counts: BTreeMap<TableId, usize> = TableId::ALL
        .iter()
        .map(|table| (*table, store.len(*table)))
        .collect();
    assert_eq!(overview.table_counts, counts);

    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["tableCounts"]["customers"], 4);
}

#[test]
fn dashboard_counts_only_pending_orders() {
    let store = open_store().unwrap();
    store
        .orders()
        .create(NewOrder {
            order_number: "AG-3001".to_string(),
            buyer_id: "cust-002".to_string(),
            status: OrderStatus::Processing,
            ..NewOrder::default()
        })
        .unwrap();

    let overview = DashboardService::new(&store).overview();
    assert_eq!(overview.pending_orders, 1);
    assert_eq!(overview.table_counts[&TableId::Orders], 5);
}

#[test]
fn logging_init_is_idempotent_for_same_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig::new("info", dir.path());

    init_logging(&config).unwrap();
    init_logging(&config).unwrap();
    let (level, log_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(log_dir, dir.path());

    let other = LoggingConfig::new("debug", dir.path());
    assert!(init_logging(&other).is_err());

    open_store().unwrap();
}

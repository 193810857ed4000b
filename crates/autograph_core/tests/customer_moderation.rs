use autograph_core::{
    open_store, open_store_empty, CustomerPatch, CustomerService, CustomerServiceError,
    CustomerStatus, NewCustomer, RepoError, ValidationError,
};

#[test]
fn create_ban_unban_scenario() {
    let store = open_store_empty();
    let service = CustomerService::new(&store);

    let created = store
        .customers()
        .create(NewCustomer::new("An", "an@x.com", "0900000000"))
        .unwrap();
    assert!(!created.meta.id.is_empty());
    assert_eq!(created.status, CustomerStatus::Active);
    assert_eq!(created.meta.created_at, created.meta.updated_at);

    let banned = service.ban(&created.meta.id, "fraud").unwrap().unwrap();
    assert_eq!(banned.status, CustomerStatus::Banned);
    assert_eq!(banned.banned_reason.as_deref(), Some("fraud"));
    assert!(banned.banned_at.is_some());
    assert_eq!(banned.meta.id, created.meta.id);
    assert_eq!(banned.meta.created_at, created.meta.created_at);

    let unbanned = service.unban(&banned.meta.id).unwrap().unwrap();
    assert_eq!(unbanned.status, CustomerStatus::Active);
    assert_eq!(unbanned.banned_reason, None);
    assert_eq!(unbanned.banned_at, None);
    assert!(unbanned.meta.updated_at >= banned.meta.updated_at);

    let stored = store.customers().get_by_id(&created.meta.id).unwrap();
    assert_eq!(stored, unbanned);
}

#[test]
fn ban_unknown_customer_changes_nothing() {
    let store = open_store().unwrap();
    let before = store.snapshot();

    let result = CustomerService::new(&store).ban("cust-404", "spam").unwrap();
    assert!(result.is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn ban_with_blank_reason_is_declined() {
    let store = open_store().unwrap();
    let before = store.customers().get_by_id("cust-001").unwrap();

    let err = CustomerService::new(&store).ban("cust-001", "  \n").unwrap_err();
    assert_eq!(err, CustomerServiceError::EmptyBanReason);
    assert_eq!(store.customers().get_by_id("cust-001").unwrap(), before);
}

#[test]
fn unban_active_customer_only_refreshes_updated_at() {
    let store = open_store().unwrap();
    let before = store.customers().get_by_id("cust-002").unwrap();

    let after = CustomerService::new(&store)
        .unban("cust-002")
        .unwrap()
        .unwrap();
    assert_eq!(after.status, CustomerStatus::Active);
    assert_eq!(after.name, before.name);
    assert!(after.meta.updated_at >= before.meta.updated_at);
}

#[test]
fn unban_unknown_customer_returns_none() {
    let store = open_store().unwrap();
    assert!(CustomerService::new(&store).unban("ghost").unwrap().is_none());
}

#[test]
fn generic_update_cannot_ban_without_reason() {
    let store = open_store().unwrap();
    let before = store.customers().get_by_id("cust-001").unwrap();

    let err = store
        .customers()
        .update(
            "cust-001",
            CustomerPatch {
                status: Some(CustomerStatus::Banned),
                ..CustomerPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, RepoError::Validation(ValidationError::BanWithoutReason));
    assert_eq!(store.customers().get_by_id("cust-001").unwrap(), before);
}

#[test]
fn generic_update_to_inactive_clears_ban_fields() {
    let store = open_store().unwrap();
    let banned = store.customers().get_by_id("cust-003").unwrap();
    assert!(banned.is_banned());

    let inactive = store
        .customers()
        .update(
            "cust-003",
            CustomerPatch {
                status: Some(CustomerStatus::Inactive),
                ..CustomerPatch::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(inactive.status, CustomerStatus::Inactive);
    assert_eq!(inactive.banned_reason, None);
    assert_eq!(inactive.banned_at, None);
}

#[test]
fn editing_a_banned_customer_keeps_ban_state() {
    let store = open_store().unwrap();
    let updated = store
        .customers()
        .update(
            "cust-003",
            CustomerPatch {
                phone: Some("0981112222".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap()
        .unwrap();
    assert!(updated.is_banned());
    assert!(updated.banned_reason.is_some());
    assert_eq!(updated.phone, "0981112222");
}

#[test]
fn reset_password_issues_fresh_credentials() {
    let store = open_store().unwrap();
    let service = CustomerService::new(&store);
    let before = store.snapshot();

    let first = service.reset_password("cust-001").unwrap();
    let second = service.reset_password("cust-001").unwrap();
    assert_eq!(first.customer_id, "cust-001");
    assert_eq!(first.temp_password.len(), 12);
    assert_ne!(first.temp_password, second.temp_password);
    assert_eq!(store.snapshot(), before);

    assert!(service.reset_password("cust-404").is_none());
}

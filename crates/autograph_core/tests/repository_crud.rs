use autograph_core::{
    open_store, open_store_empty, AuctionPatch, AuctionStatus, CustomerPatch, CustomerStatus,
    DiscountType, NewAffiliate, NewArticle, NewAuction, NewCustomer, NewProduct, NewUser,
    NewVoucher, OrderPatch, ProductPatch, ProductStatus, RepoError, Store, TableId,
    ValidationError, VoucherPatch,
};
use chrono::{Duration, Utc};
use std::collections::HashSet;

fn product(title: &str, price: f64) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        category: "Baseball".to_string(),
        signed_by: "Babe Ruth".to_string(),
        price,
        ..NewProduct::default()
    }
}

#[test]
fn create_stamps_identity_and_timestamps() {
    let store = open_store_empty();
    let created = store.products().create(product("Signed bat", 900.0)).unwrap();

    assert!(!created.meta.id.is_empty());
    assert_eq!(created.meta.created_at, created.meta.updated_at);
    assert_eq!(created.status, ProductStatus::Draft);

    let loaded = store.products().get_by_id(&created.meta.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn created_ids_are_unique_even_after_deletes() {
    let store = open_store_empty();
    let customers = store.customers();
    let mut seen = HashSet::new();

    for round in 0..50 {
        let created = customers
            .create(NewCustomer::new(
                format!("Customer {round}"),
                format!("c{round}@example.com"),
                "0900000000",
            ))
            .unwrap();
        assert!(seen.insert(created.meta.id.clone()), "id reused: {}", created.meta.id);
        if round % 3 == 0 {
            assert!(customers.delete(&created.meta.id));
        }
    }
}

#[test]
fn get_all_preserves_insertion_order_and_returns_copies() {
    let store = open_store_empty();
    let first = store.products().create(product("First", 1.0)).unwrap();
    let second = store.products().create(product("Second", 2.0)).unwrap();
    let third = store.products().create(product("Third", 3.0)).unwrap();

    let mut all = store.products().get_all();
    let ids: Vec<_> = all.iter().map(|p| p.meta.id.clone()).collect();
    assert_eq!(ids, vec![first.meta.id, second.meta.id, third.meta.id]);

    all[0].title = "mutated copy".to_string();
    assert_eq!(store.products().get_all()[0].title, "First");
}

#[test]
fn get_by_id_missing_returns_none() {
    let store = open_store_empty();
    assert!(store.products().get_by_id("nope").is_none());
}

#[test]
fn update_merges_patch_and_preserves_identity() {
    let store = open_store_empty();
    let products = store.products();
    let first = products.create(product("First", 10.0)).unwrap();
    let second = products.create(product("Second", 20.0)).unwrap();

    let updated = products
        .update(
            &first.meta.id,
            ProductPatch {
                price: Some(15.0),
                status: Some(ProductStatus::Active),
                ..ProductPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.meta.id, first.meta.id);
    assert_eq!(updated.meta.created_at, first.meta.created_at);
    assert!(updated.meta.updated_at >= first.meta.updated_at);
    assert_eq!(updated.price, 15.0);
    assert_eq!(updated.status, ProductStatus::Active);
    assert_eq!(updated.title, "First");
    assert_eq!(updated.signed_by, "Babe Ruth");

    let all = products.get_all();
    assert_eq!(all[0], updated);
    assert_eq!(all[1], second);
}

#[test]
fn update_missing_returns_none_without_mutation() {
    let store = open_store_empty();
    store.products().create(product("Only", 5.0)).unwrap();
    let before = store.snapshot();

    let result = store
        .products()
        .update("missing", ProductPatch::default())
        .unwrap();
    assert!(result.is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn update_advances_updated_at_monotonically() {
    let store = open_store_empty();
    let created = store
        .customers()
        .create(NewCustomer::new("Khanh", "khanh@example.com", "0904444444"))
        .unwrap();

    let mut previous = created.meta.updated_at;
    for round in 0..5 {
        let updated = store
            .customers()
            .update(
                &created.meta.id,
                CustomerPatch {
                    phone: Some(format!("090000000{round}")),
                    ..CustomerPatch::default()
                },
            )
            .unwrap()
            .unwrap();
        assert!(updated.meta.updated_at >= previous);
        assert_eq!(updated.meta.created_at, created.meta.created_at);
        previous = updated.meta.updated_at;
    }
}

#[test]
fn declined_update_leaves_record_untouched() {
    let store = open_store_empty();
    let created = store
        .vouchers()
        .create(NewVoucher {
            code: "SIGNED20".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 20.0,
            ..NewVoucher::default()
        })
        .unwrap();

    let err = store
        .vouchers()
        .update(
            &created.meta.id,
            VoucherPatch {
                code: Some("   ".to_string()),
                discount_value: Some(10.0),
                ..VoucherPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, RepoError::Validation(ValidationError::BlankField("code")));

    let loaded = store.vouchers().get_by_id(&created.meta.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn declined_create_stores_nothing() {
    let store = open_store_empty();
    let start = Utc::now();
    let err = store
        .auctions()
        .create(NewAuction {
            product_id: "prod-001".to_string(),
            title: "Backwards".to_string(),
            starting_price: 100.0,
            current_bid: None,
            highest_bidder_id: None,
            bid_count: 0,
            starts_at: start,
            ends_at: start - Duration::hours(1),
            status: AuctionStatus::Scheduled,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidTimeRange { field: "endsAt", .. })
    ));
    assert_eq!(store.len(TableId::Auctions), 0);
}

#[test]
fn unvalidated_tables_accept_sparse_payloads() {
    let store = open_store_empty();

    let user = store
        .users()
        .create(NewUser {
            name: "Ops".to_string(),
            ..NewUser::default()
        })
        .unwrap();
    assert_eq!(user.email, "");

    let customer = store
        .customers()
        .create(NewCustomer::new("", "", "0900"))
        .unwrap();
    assert_eq!(customer.status, CustomerStatus::Active);

    let article = store
        .articles()
        .create(NewArticle {
            title: "T".to_string(),
            ..NewArticle::default()
        })
        .unwrap();
    assert_eq!(article.slug, "");

    let product = store.products().create(product("Refund credit", -5.0)).unwrap();
    assert_eq!(product.price, -5.0);

    let affiliate = store
        .affiliates()
        .create(NewAffiliate {
            commission_rate: 1.5,
            total_referrals: 3,
            total_earnings: 120.0,
            ..NewAffiliate::default()
        })
        .unwrap();
    assert_eq!(affiliate.total_referrals, 3);
    assert_eq!(affiliate.total_earnings, 120.0);
}

#[test]
fn drafts_carry_every_record_field() {
    let store = open_store_empty();
    let login = Utc::now();

    let user = store
        .users()
        .create(NewUser {
            name: "Linh".to_string(),
            email: "linh@example.com".to_string(),
            last_login_at: Some(login),
            ..NewUser::default()
        })
        .unwrap();
    assert_eq!(user.last_login_at, Some(login));

    let voucher: NewVoucher =
        serde_json::from_str(r#"{"code": "VIP", "discountValue": 5, "usedCount": 7}"#).unwrap();
    let voucher = store.vouchers().create(voucher).unwrap();
    assert_eq!(voucher.used_count, 7);
}

#[test]
fn delete_is_exact() {
    let store = open_store_empty();
    let keep = store.products().create(product("Keep", 1.0)).unwrap();
    let drop = store.products().create(product("Drop", 1.0)).unwrap();

    assert!(store.products().delete(&drop.meta.id));
    assert!(store.products().get_by_id(&drop.meta.id).is_none());
    assert_eq!(store.products().count(), 1);

    assert!(!store.products().delete(&drop.meta.id));
    assert!(!store.products().delete("never-existed"));
    assert_eq!(store.products().count(), 1);
    assert!(store.products().exists(&keep.meta.id));
}

#[test]
fn bulk_delete_counts_only_removed_records() {
    let store = open_store_empty();
    let a = store.products().create(product("A", 1.0)).unwrap();
    let b = store.products().create(product("B", 1.0)).unwrap();
    let c = store.products().create(product("C", 1.0)).unwrap();

    let removed = store.products().bulk_delete([
        a.meta.id.as_str(),
        "missing",
        b.meta.id.as_str(),
        a.meta.id.as_str(),
    ]);
    assert_eq!(removed, 2);
    assert_eq!(store.products().ids(), vec![c.meta.id]);
}

#[test]
fn bulk_delete_result_does_not_depend_on_order() {
    let forward = Store::new();
    let backward = Store::new();
    let mut forward_ids = Vec::new();
    let mut backward_ids = Vec::new();
    for title in ["A", "B", "C", "D"] {
        forward_ids.push(forward.products().create(product(title, 1.0)).unwrap().meta.id);
        backward_ids.push(backward.products().create(product(title, 1.0)).unwrap().meta.id);
    }

    let forward_removed = forward
        .products()
        .bulk_delete(vec![forward_ids[0].clone(), forward_ids[2].clone()]);
    let backward_removed = backward
        .products()
        .bulk_delete(vec![backward_ids[2].clone(), backward_ids[0].clone()]);

    assert_eq!(forward_removed, backward_removed);
    let titles = |store: &Store| -> Vec<String> {
        store.products().get_all().into_iter().map(|p| p.title).collect()
    };
    assert_eq!(titles(&forward), titles(&backward));
    assert_eq!(titles(&forward), vec!["B".to_string(), "D".to_string()]);
}

#[test]
fn patch_payloads_reject_unknown_fields() {
    let patch: ProductPatch = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
    assert_eq!(patch.price, Some(12.5));

    let malformed = serde_json::from_str::<ProductPatch>(r#"{"id": "prod-999"}"#);
    assert!(malformed.is_err());
}

#[test]
fn patch_payloads_accept_every_record_field() {
    let store = open_store().unwrap();

    let order_patch: OrderPatch = serde_json::from_str(
        r#"{"orderNumber": "AG-7777", "buyerId": "cust-004", "items": []}"#,
    )
    .unwrap();
    let order = store.orders().update("ord-003", order_patch).unwrap().unwrap();
    assert_eq!(order.order_number, "AG-7777");
    assert_eq!(order.buyer_id, "cust-004");
    assert!(order.items.is_empty());
    assert_eq!(order.total, 2500.0);

    let auction_patch: AuctionPatch =
        serde_json::from_str(r#"{"productId": "prod-004", "startingPrice": 50}"#).unwrap();
    let auction = store.auctions().update("auc-003", auction_patch).unwrap().unwrap();
    assert_eq!(auction.product_id, "prod-004");
    assert_eq!(auction.starting_price, 50.0);
}

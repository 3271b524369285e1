// ═══════════════════════════════════════════════════════════════════
// Store Tests — MemoryStore, RestStore request building
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use rust_decimal::Decimal;

use expense_stats_core::errors::CoreError;
use expense_stats_core::models::category::Category;
use expense_stats_core::models::transaction::{Transaction, TransactionFilter, TransactionType};
use expense_stats_core::stores::http::RestStore;
use expense_stats_core::stores::memory::MemoryStore;
use expense_stats_core::stores::traits::{CategoryRegistry, TransactionStore};

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january_filter(user_id: Option<&str>) -> TransactionFilter {
    TransactionFilter {
        user_id: user_id.map(str::to_string),
        from: make_date(2025, 1, 1),
        to: make_date(2025, 1, 31),
        kind: Some(TransactionType::Expense),
    }
}

// ── MemoryStore ─────────────────────────────────────────────────────

mod memory_store {
    use super::*;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_transaction(Transaction::expense(
            "alice",
            Some("food"),
            Decimal::from(10),
            make_date(2025, 1, 1),
        ));
        store.add_transaction(Transaction::expense(
            "bob",
            Some("food"),
            Decimal::from(20),
            make_date(2025, 1, 31),
        ));
        store.add_transaction(Transaction::expense(
            "alice",
            None,
            Decimal::from(5),
            make_date(2025, 2, 1),
        ));
        store.add_transaction(Transaction::new(
            "alice",
            Some("salary".into()),
            TransactionType::Revenue,
            Decimal::from(1000),
            make_date(2025, 1, 15),
        ));
        store.add_category(Category::new("food", "Food"));
        store
    }

    #[tokio::test]
    async fn query_applies_all_constraints() {
        let rows = store().query(&january_filter(Some("alice"))).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, Decimal::from(10));
    }

    #[tokio::test]
    async fn query_without_user_returns_all_users() {
        let rows = store().query(&january_filter(None)).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn query_without_kind_includes_revenue() {
        let filter = TransactionFilter {
            kind: None,
            ..january_filter(Some("alice"))
        };
        let rows = store().query(&filter).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn lists_categories() {
        let categories = store().list_categories().await.unwrap();
        assert_eq!(categories, vec![Category::new("food", "Food")]);
    }

    #[test]
    fn names() {
        let store = MemoryStore::new();
        assert_eq!(TransactionStore::name(&store), "memory");
        assert_eq!(CategoryRegistry::name(&store), "memory");
    }

    #[test]
    fn with_data_exposes_contents() {
        let store = MemoryStore::with_data(
            vec![Transaction::expense(
                "u",
                None,
                Decimal::ONE,
                make_date(2025, 1, 1),
            )],
            vec![Category::new("x", "X")],
        );
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.categories().len(), 1);
    }
}

// ── RestStore ───────────────────────────────────────────────────────

mod rest_store {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let store = RestStore::new("http://localhost:3000/api/");
        assert_eq!(store.base_url(), "http://localhost:3000/api");
        assert_eq!(
            store.transactions_url(),
            "http://localhost:3000/api/transactions"
        );
        assert_eq!(store.categories_url(), "http://localhost:3000/api/categories");
    }

    #[test]
    fn query_params_for_user() {
        let params = RestStore::query_params(&january_filter(Some("u1")));
        assert_eq!(
            params,
            vec![
                ("from", "2025-01-01".to_string()),
                ("to", "2025-01-31".to_string()),
                ("type", "expense".to_string()),
                ("userId", "u1".to_string()),
            ]
        );
    }

    #[test]
    fn query_params_for_all_users() {
        let filter = TransactionFilter {
            kind: None,
            ..january_filter(None)
        };
        let params = RestStore::query_params(&filter);
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|(k, _)| *k != "userId" && *k != "type"));
    }

    #[test]
    fn names() {
        let store = RestStore::new("http://localhost").with_bearer_token("secret");
        assert_eq!(TransactionStore::name(&store), "rest");
        assert_eq!(CategoryRegistry::name(&store), "rest");
    }

    #[tokio::test]
    async fn unreachable_backend_is_upstream_unavailable() {
        // Port 9 (discard) on localhost is not expected to run an HTTP server.
        let store = RestStore::new("http://127.0.0.1:9");
        let err = store.query(&january_filter(Some("u1"))).await.unwrap_err();
        match err {
            CoreError::UpstreamUnavailable {
                source_name,
                message,
            } => {
                assert_eq!(source_name, TransactionStore::name(&store));
                assert!(!message.contains("userId=u1"));
            }
            other => panic!("Expected UpstreamUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_registry_is_tagged_with_store_name() {
        let store = RestStore::new("http://127.0.0.1:9");
        let err = store.list_categories().await.unwrap_err();
        match err {
            CoreError::UpstreamUnavailable { source_name, .. } => assert_eq!(source_name, "rest"),
            other => panic!("Expected UpstreamUnavailable, got {other:?}"),
        }
    }
}

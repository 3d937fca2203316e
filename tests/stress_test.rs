//! Stress tests for the order desk.
//!
//! These tests verify:
//! 1. A long random workload stays consistent with a simple model
//! 2. Determinism is preserved across runs (same seed, same state root)
//! 3. Degenerate insert orders do not blow the stack
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use chrono::{DateTime, Utc};
use order_desk::{DeskError, ItemRequest, OrderDesk, ProductCatalog};
use rust_decimal::Decimal;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Products attempted per workload (duplicates are rejected)
const PRODUCT_COUNT: usize = 1_500;

/// Order operations per workload
const OPERATION_COUNT: usize = 4_000;

/// Ids are drawn from 1..=ID_SPACE so duplicates and misses both occur
const PRODUCT_ID_SPACE: u64 = 2_000;
const ORDER_ID_SPACE: u64 = 2_500;

/// Size of the ascending insert used for the degenerate-tree checks
const DEGENERATE_COUNT: u64 = 10_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn timestamp(seq: usize) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000 + seq as i64, 0).unwrap()
}

fn random_requests(rng: &mut ChaCha8Rng) -> Vec<ItemRequest> {
    let lines = rng.gen_range(1..=4);
    (0..lines)
        .map(|_| {
            ItemRequest::new(
                rng.gen_range(1..=PRODUCT_ID_SPACE),
                rng.gen_range(0..=12),
            )
        })
        .collect()
}

/// Outcome counters for one workload
#[derive(Debug, Default)]
struct Tally {
    created: usize,
    rejected: usize,
    updated: usize,
    deleted: usize,
}

/// Drive a seeded workload, checking it against a shadow list of live order
/// ids. Returns the desk so callers can inspect it.
fn run_workload(seed: u64) -> (OrderDesk, Tally) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut desk = OrderDesk::new();
    let mut tally = Tally::default();

    for _ in 0..PRODUCT_COUNT {
        let id = rng.gen_range(1..=PRODUCT_ID_SPACE);
        let price = Decimal::new(rng.gen_range(1..=100_000), 2);
        let stock = rng.gen_range(0..=50);

        match desk.add_product(id, format!("P{id}"), price, stock) {
            Ok(_) => {}
            Err(DeskError::DuplicateKey(dup)) => assert_eq!(dup, id),
            Err(other) => panic!("unexpected product error: {other}"),
        }
    }

    let mut live: Vec<u64> = Vec::new();

    for seq in 0..OPERATION_COUNT {
        let id = rng.gen_range(1..=ORDER_ID_SPACE);

        match rng.gen_range(0..10) {
            0..=5 => {
                let requests = random_requests(&mut rng);
                match desk.create_order_at(id, "stress", &requests, timestamp(seq)) {
                    Ok(order) => {
                        assert!(!live.contains(&id));
                        let sum: Decimal = order.items.iter().map(|i| i.subtotal).sum();
                        assert_eq!(order.total, sum);
                        live.push(id);
                        tally.created += 1;
                    }
                    Err(_) => tally.rejected += 1,
                }
            }
            6..=7 => {
                let requests = random_requests(&mut rng);
                let customer = rng.gen_bool(0.5).then(|| format!("C{seq}"));
                match desk.update_order(id, customer, Some(requests.as_slice())) {
                    Ok(order) => {
                        assert!(live.contains(&id));
                        assert_eq!(order.items.len(), requests.len());
                        tally.updated += 1;
                    }
                    Err(DeskError::OrderNotFound(missing)) => {
                        assert_eq!(missing, id);
                        assert!(!live.contains(&id));
                    }
                    Err(_) => tally.rejected += 1,
                }
            }
            _ => match desk.delete_order(id) {
                Some(order) => {
                    assert_eq!(order.id, id);
                    live.retain(|&live_id| live_id != id);
                    tally.deleted += 1;
                }
                None => assert!(!live.contains(&id)),
            },
        }
    }

    let listed: Vec<u64> = desk.list_orders().iter().map(|o| o.id).collect();
    assert_eq!(listed, live, "ledger order diverged from model (seed {seed})");

    (desk, tally)
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Mixed workload: creates, updates and deletes against a shared catalog.
///
/// # Verification
/// - Ledger contents and order match a shadow list of live ids
/// - Catalog lists strictly ascending
/// - Every stored total equals the sum of its lines
#[test]
fn stress_mixed_workload() {
    println!("\n=== STRESS TEST: Mixed Workload ===\n");

    let start = Instant::now();
    let (desk, tally) = run_workload(42);
    let elapsed = start.elapsed();

    let products = desk.list_products();
    assert!(products.windows(2).all(|w| w[0].id < w[1].id));

    for order in desk.list_orders() {
        let sum: Decimal = order.items.iter().map(|i| i.subtotal).sum();
        assert_eq!(order.total, sum, "order {} total drifted", order.id);
    }

    println!("  Products:          {:>12}", products.len());
    println!("  Orders created:    {:>12}", tally.created);
    println!("  Orders updated:    {:>12}", tally.updated);
    println!("  Orders deleted:    {:>12}", tally.deleted);
    println!("  Rejected ops:      {:>12}", tally.rejected);
    println!("  Live orders:       {:>12}", desk.summary().orders);
    println!("  Catalog depth:     {:>12}", desk.catalog().depth());
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  State root:        {}", desk.state_root_hex());

    assert!(tally.created > 0, "expected some orders to succeed");
    assert!(tally.rejected > 0, "expected some orders to be rejected");

    println!("\n=== STRESS TEST PASSED ===\n");
}

/// Same seed and timestamps must give the same state root.
#[test]
fn verify_determinism() {
    const SEED: u64 = 12345;

    let (first, _) = run_workload(SEED);
    let (second, _) = run_workload(SEED);

    println!("  Run 1 state root: {}", first.state_root_hex());
    println!("  Run 2 state root: {}", second.state_root_hex());
    assert_eq!(first.state_root(), second.state_root());

    let (other, _) = run_workload(SEED + 1);
    assert_ne!(first.state_root(), other.state_root());
}

/// Ascending ids build a right-leaning chain as deep as the catalog is long.
#[test]
fn stress_ascending_inserts_degenerate_chain() {
    let mut catalog = ProductCatalog::with_capacity(DEGENERATE_COUNT as usize);

    let start = Instant::now();
    for id in 1..=DEGENERATE_COUNT {
        catalog.insert(id, "chain", Decimal::ONE, 1).unwrap();
    }
    println!("  {} ascending inserts in {:.2?}", DEGENERATE_COUNT, start.elapsed());

    assert_eq!(catalog.depth(), DEGENERATE_COUNT as usize);
    assert_eq!(catalog.root_id(), Some(1));
    assert_eq!(catalog.lookup(DEGENERATE_COUNT).map(|p| p.id), Some(DEGENERATE_COUNT));
    assert!(catalog.lookup(DEGENERATE_COUNT + 1).is_none());

    let listed = catalog.list_all();
    assert_eq!(listed.len(), DEGENERATE_COUNT as usize);
    assert_eq!(listed.first().map(|p| p.id), Some(1));
    assert_eq!(listed.last().map(|p| p.id), Some(DEGENERATE_COUNT));
}

/// Descending ids lean the other way; traversal must still come out sorted.
#[test]
fn stress_descending_inserts_degenerate_chain() {
    let mut catalog = ProductCatalog::new();
    for id in (1..=DEGENERATE_COUNT).rev() {
        catalog.insert(id, "chain", Decimal::ONE, 1).unwrap();
    }

    assert_eq!(catalog.depth(), DEGENERATE_COUNT as usize);
    assert_eq!(
        catalog.insert(1, "again", Decimal::ONE, 1).unwrap_err(),
        DeskError::DuplicateKey(1)
    );

    let mut expected = 1;
    for product in &catalog {
        assert_eq!(product.id, expected);
        expected += 1;
    }
    assert_eq!(expected, DEGENERATE_COUNT + 1);
}

/// A long ledger survives deletes at the head, middle and tail.
#[test]
fn stress_ledger_churn() {
    let mut desk = OrderDesk::new();
    desk.add_product(1, "A", Decimal::new(250, 2), 1_000).unwrap();

    let count = 3_000u64;
    for id in 1..=count {
        desk.create_order_at(id, "churn", &[ItemRequest::new(1, 1)], timestamp(id as usize))
            .unwrap();
    }

    assert!(desk.delete_order(1).is_some());
    assert!(desk.delete_order(count / 2).is_some());
    assert!(desk.delete_order(count).is_some());

    assert_eq!(desk.ledger().head_id(), Some(2));
    assert_eq!(desk.ledger().tail_id(), Some(count - 1));
    assert_eq!(desk.list_orders().len(), count as usize - 3);

    // Appending after a tail delete links onto the new tail
    desk.create_order_at(count + 1, "late", &[ItemRequest::new(1, 2)], timestamp(0))
        .unwrap();
    assert_eq!(desk.ledger().tail_id(), Some(count + 1));
    assert_eq!(desk.get_order(count + 1).map(|o| o.total), Some(Decimal::from(5)));
}

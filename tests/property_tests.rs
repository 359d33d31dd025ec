//! Property-based tests using proptest.
//!
//! These tests check invariants of grid construction and the arbitrage scan
//! across random grids, smiles and price tables rather than fixed examples.

use proptest::prelude::*;
use smile_region::region::scanner::is_arbitrage_free;
use smile_region::region::{PricedGrid, SmileRegion, StrikeGrid};
use smile_region::smile::FlatSmile;

/// Strictly increasing moneyness grid with at least two points on each side
/// of 1.0 and no zero point.
fn moneyness_grid() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(0.02_f64..0.15, 2..6),
        prop::collection::vec(0.05_f64..1.0, 2..6),
    )
        .prop_map(|(down, up)| {
            let mut below = Vec::with_capacity(down.len());
            let mut m = 1.0;
            for d in down {
                m -= d;
                below.push(m);
            }
            below.reverse();

            let mut grid = below;
            grid.push(1.0);
            let mut m = 1.0;
            for u in up {
                m += u;
                grid.push(m);
            }
            grid
        })
}

/// Zero-prefixed grid, strikes and an arbitrage-free call curve
/// `c(k) = F·exp(−k/F)`.
fn convex_table(forward: f64, grid: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut moneyness = vec![0.0];
    moneyness.extend_from_slice(grid);
    let strikes: Vec<f64> = moneyness.iter().map(|m| m * forward).collect();
    let prices = strikes.iter().map(|k| forward * (-k / forward).exp()).collect();
    (moneyness, strikes, prices)
}

// --- Property Test 1: the zero-strike point always passes ---

proptest! {
    #[test]
    fn zero_index_is_always_arbitrage_free(
        prices in prop::collection::vec(-10.0_f64..200.0, 1..12),
        i0 in 0_usize..12,
        i1 in 0_usize..12,
    ) {
        let strikes: Vec<f64> = (0..prices.len()).map(|i| i as f64 * 10.0).collect();
        prop_assert!(is_arbitrage_free(&strikes, &prices, i0, 0, i1));
    }
}

// --- Property Test 2: region brackets the anchor for any price table ---

proptest! {
    #[test]
    fn region_brackets_anchor(
        grid in moneyness_grid(),
        forward in 10.0_f64..500.0,
        noise in prop::collection::vec(0.0_f64..1.0, 16),
    ) {
        let mut moneyness = vec![0.0];
        moneyness.extend_from_slice(&grid);
        let strikes: Vec<f64> = moneyness.iter().map(|m| m * forward).collect();
        let mut prices: Vec<f64> = noise[..strikes.len()].iter().map(|u| u * forward).collect();
        prices[0] = forward;

        let region = SmileRegion::from_priced_grid(
            PricedGrid::new(forward, moneyness, strikes, prices).unwrap(),
        )
        .unwrap();
        let (left, right) = region.arbitrage_free_index_region();
        let atm = region.atm_index();

        prop_assert!(left >= 1);
        prop_assert!(left <= atm && atm <= right);
        prop_assert!(right < region.len());
    }
}

// --- Property Test 3: a convex, bounded-slope curve passes everywhere ---

proptest! {
    #[test]
    fn convex_curve_spans_whole_grid(
        grid in moneyness_grid(),
        forward in 10.0_f64..500.0,
    ) {
        let (moneyness, strikes, prices) = convex_table(forward, &grid);
        let last = strikes.len() - 1;
        let region = SmileRegion::from_priced_grid(
            PricedGrid::new(forward, moneyness, strikes, prices).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(region.arbitrage_free_index_region(), (1, last));
    }
}

// --- Property Test 4: a price bump above the forward cuts the right edge ---

proptest! {
    #[test]
    fn bump_right_of_anchor_stops_right_scan(
        grid in moneyness_grid(),
        forward in 10.0_f64..500.0,
        pick in any::<prop::sample::Index>(),
    ) {
        let (moneyness, strikes, mut prices) = convex_table(forward, &grid);
        let atm = moneyness.iter().position(|&m| m == 1.0).unwrap();
        let last = strikes.len() - 1;
        let j = atm + 1 + pick.index(last - atm);
        prices[j] = prices[j - 1] + 0.01 * forward;

        let region = SmileRegion::from_priced_grid(
            PricedGrid::new(forward, moneyness, strikes, prices).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(region.arbitrage_free_index_region(), (1, j - 1));
    }
}

// --- Property Test 5: flat smiles satisfy the region invariants ---

proptest! {
    #[test]
    fn flat_smile_region_invariants(
        grid in moneyness_grid(),
        forward in 10.0_f64..500.0,
        vol in 0.1_f64..0.8,
        expiry in 0.25_f64..5.0,
    ) {
        let section = FlatSmile::new(forward, expiry, vol).unwrap();
        let region = SmileRegion::new(&section, &grid, None).unwrap();
        let (left, right) = region.arbitrage_free_index_region();

        prop_assert_eq!(region.atm_index(), grid.iter().position(|&m| m == 1.0).unwrap() + 1);
        prop_assert!(left <= region.atm_index() && region.atm_index() <= right);
        prop_assert!(right < region.len());
        prop_assert_eq!(region.call_prices()[0], forward);
    }
}

// --- Property Test 6: construction is deterministic ---

proptest! {
    #[test]
    fn construction_is_idempotent(
        grid in moneyness_grid(),
        forward in 10.0_f64..500.0,
        vol in 0.1_f64..0.8,
    ) {
        let section = FlatSmile::new(forward, 1.0, vol).unwrap();
        let a = SmileRegion::new(&section, &grid, None).unwrap();
        let b = SmileRegion::new(&section, &grid, None).unwrap();
        prop_assert_eq!(a, b);
    }
}

// --- Property Test 7: the strike filter keeps exactly the in-range points ---

proptest! {
    #[test]
    fn strike_grid_keeps_in_range_subsequence(
        grid in moneyness_grid(),
        forward in 50.0_f64..200.0,
        lo in 0.0_f64..50.0,
        hi_factor in 1.0_f64..10.0,
    ) {
        let hi = forward * hi_factor;
        let section = FlatSmile::new(forward, 1.0, 0.2)
            .unwrap()
            .with_strike_range(lo, hi)
            .unwrap();
        let g = StrikeGrid::build(&section, &grid, None).unwrap();

        let mut expected = vec![0.0];
        expected.extend(grid.iter().copied().filter(|m| {
            let k = m * forward;
            lo <= k && k <= hi
        }));
        prop_assert_eq!(g.moneyness(), expected.as_slice());
        for (m, k) in g.moneyness().iter().zip(g.strikes()) {
            prop_assert_eq!(*k, m * forward);
        }
    }
}

//! Diagnose the arbitrage-free region of a clean and a corrupted smile.
//!
//! Shows how to:
//!   - Build a knot smile from market quotes
//!   - Find the strike window where its call prices are arbitrage-free
//!   - See how a single bad quote shrinks that window
//!   - Diagnose several expiries in one batch
//!
//! Run with: `cargo run --example region_scan`

use smile_region::conventions::forward_price;
use smile_region::region::RegionBuilder;
use smile_region::smile::{InterpolatedSmile, SmileSection};
use smile_region::{SmileRegion, Strike};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (spot, rate, dividend_yield, expiry) = (100.0, 0.03, 0.01, 1.0);
    let forward = forward_price(spot, rate, dividend_yield, expiry);

    // Market quotes as (moneyness, implied vol)
    let quotes: Vec<(f64, f64)> = vec![
        (0.5, 0.34),
        (0.6, 0.31),
        (0.7, 0.28),
        (0.8, 0.25),
        (0.9, 0.22),
        (1.0, 0.20),
        (1.1, 0.19),
        (1.2, 0.19),
        (1.3, 0.20),
        (1.5, 0.22),
        (2.0, 0.26),
    ];
    let grid: Vec<f64> = quotes.iter().map(|&(m, _)| m).collect();
    let (strikes, vols): (Vec<f64>, Vec<f64>) =
        quotes.iter().map(|&(m, v)| (m * forward, v)).unzip();

    // ---------------------------------------------------------------
    // 1. Clean smile
    // ---------------------------------------------------------------

    let clean = InterpolatedSmile::new(forward, expiry, strikes.clone(), vols.clone())?;
    let region = SmileRegion::new(&clean, &grid, None)?;
    println!("Forward {forward:.4}, {} grid points\n", region.len());
    print_region("clean", &region);

    // ---------------------------------------------------------------
    // 2. One bad quote at 1.3x the forward
    // ---------------------------------------------------------------

    let mut bad_vols = vols;
    bad_vols[8] = 0.75;
    let corrupted = InterpolatedSmile::new(forward, expiry, strikes, bad_vols)?;
    let region = SmileRegion::new(&corrupted, &grid, None)?;
    print_region("bad quote", &region);

    println!("\n{:>10} {:>12} {:>8}", "Strike", "Call", "Clean");
    println!("{}", "-".repeat(32));
    for (k, c) in region.strikes().iter().zip(region.call_prices()) {
        let flag = if region.contains_strike(*k) { "yes" } else { "no" };
        println!("{k:>10.4} {c:>12.6} {flag:>8}");
    }

    // ---------------------------------------------------------------
    // 3. A term structure of flat-ish smiles
    // ---------------------------------------------------------------

    println!("\n--- Batch over expiries ---\n");
    let smiles: Vec<InterpolatedSmile> = [0.25, 0.5, 1.0, 2.0, 5.0]
        .iter()
        .map(|&t| {
            let f = forward_price(spot, rate, dividend_yield, t);
            let ks = grid.iter().map(|m| m * f).collect();
            let vs = quotes.iter().map(|&(_, v)| v).collect();
            InterpolatedSmile::new(f, t, ks, vs)
        })
        .collect::<Result<_, _>>()?;
    let sections: Vec<&dyn SmileSection> = smiles.iter().map(|s| s as &dyn SmileSection).collect();

    let builder = RegionBuilder::new().moneyness_grid(&grid);
    for (smile, result) in smiles.iter().zip(builder.build_many(&sections)) {
        match result {
            Ok(region) => {
                let (Strike(lo), Strike(hi)) = region.arbitrage_free_strike_region();
                println!(
                    "max strike {:>9.4}: arbitrage-free on [{lo:.4}, {hi:.4}]",
                    smile.max_strike()
                );
            }
            Err(e) => println!("max strike {:>9.4}: {e}", smile.max_strike()),
        }
    }

    Ok(())
}

fn print_region(label: &str, region: &SmileRegion) {
    let (left, right) = region.arbitrage_free_index_region();
    let (Strike(lo), Strike(hi)) = region.arbitrage_free_strike_region();
    println!(
        "{label:>10}: indices [{left}, {right}] around ATM index {}, strikes [{lo:.4}, {hi:.4}]",
        region.atm_index()
    );
}

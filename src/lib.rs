//! # smile-region
//!
//! Static-arbitrage diagnostics for a single-expiry volatility smile.
//!
//! Given any [`SmileSection`] that can price calls, the crate samples the
//! call-price curve on a moneyness grid and finds the widest contiguous window
//! around the forward where the discrete curve is decreasing, has slopes in
//! `[-1, 0]`, and is convex, i.e. consistent with a non-negative risk-neutral
//! density. It only detects the region; it never repairs prices.
//!
//! ## Architecture
//!
//! - **`smile`**: the [`SmileSection`] contract plus reference sections
//! - **`region`**: grid construction, price sampling and the arbitrage scan
//! - **`black`**: Black-76 prices used by the reference sections
//!
//! ## Design
//!
//! - **Newtypes for outputs, bare `f64` for inputs.** Region bounds come back
//!   as [`Strike`]; sections take raw `f64` strikes.
//! - **No panics.** Every fallible operation returns [`Result`]. Library code
//!   never calls `unwrap()` or `expect()`.
//! - **Immutable results.** A [`SmileRegion`] is a read-only snapshot, `Send +
//!   Sync`, built in one shot or not at all.
//! - **Serializable.** Value types and regions implement Serde; a region
//!   deserializes by re-scanning its priced grid, so its invariants always hold.
//!
//! ## Features
//!
//! - `logging`: `tracing` debug events during diagnosis
//! - `parallel`: [`RegionBuilder::build_many`] runs on the rayon pool

pub mod black;
pub mod conventions;
pub mod error;
pub mod region;
pub mod smile;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{Result, SmileRegionError};
#[doc(inline)]
pub use region::{RegionBuilder, SmileRegion};
#[doc(inline)]
pub use smile::SmileSection;
#[doc(inline)]
pub use types::{OptionType, Strike, Vol};

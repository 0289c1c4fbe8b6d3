use near_sdk::NearToken;

pub const CONTRACT_VERSION: &str = "0.1.0";

/// Default per-unit price for the public mint path, owner-adjustable at runtime.
pub const DEFAULT_PUBLIC_MINT_PRICE: NearToken = NearToken::from_millinear(20); // 0.02 NEAR

pub const ROYALTY_BPS: u16 = 1_000; // 10%
pub const BASIS_POINTS: u16 = 10_000; // 100%

// Payout shares are whole percents; the last recipient absorbs division dust.
pub const SHARE_DENOMINATOR: u128 = 100;

pub const MERKLE_ROOT_BYTES: usize = 32;

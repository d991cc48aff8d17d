//! Currency math — fixed-rate USD/BRL conversion and affiliate commission.
//!
//! The rate is a single constant applied uniformly; display formatting
//! (2 decimals) is the caller's concern.

/// Fixed USD → BRL conversion rate.
pub const USD_TO_BRL: f64 = 5.0;

pub fn usd_to_brl(usd: f64) -> f64 {
    usd * USD_TO_BRL
}

pub fn brl_to_usd(brl: f64) -> f64 {
    brl / USD_TO_BRL
}

/// Commission paid to the affiliate for one sale: `price * commission / 100`.
pub fn commission_per_sale(price: f64, commission_pct: f64) -> f64 {
    price * commission_pct / 100.0
}

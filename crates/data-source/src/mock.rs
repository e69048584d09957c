//! Synthetic stock data for demos and local testing.
//!
//! Each industry has its own price level, volatility, and valuation ranges,
//! so the generated corpus behaves plausibly under every screening strategy
//! instead of being uniform noise.

use core_types::StockRecord;
use rand::Rng;
use rust_decimal::Decimal;

struct IndustryProfile {
    industry: &'static str,
    name_parts: &'static [&'static str],
    /// Typical price in cents; actual prices vary by `volatility_pct` around it.
    base_price_cents: i64,
    volatility_pct: i64,
    /// Valuation ranges in cents.
    pe_cents: (i64, i64),
    pb_cents: (i64, i64),
    roe_cents: (i64, i64),
    /// Market cap range in hundred-millions CNY.
    market_cap: (i64, i64),
}

const PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        industry: "banking",
        name_parts: &["Merchants", "Industrial", "Citizens", "Pacific", "Harbor"],
        base_price_cents: 1_500,
        volatility_pct: 10,
        pe_cents: (300, 1_000),
        pb_cents: (50, 130),
        roe_cents: (1_000, 2_000),
        market_cap: (1_000, 41_000),
    },
    IndustryProfile {
        industry: "liquor",
        name_parts: &["Highland", "Riverbend", "Old Cellar", "Spring", "Phoenix"],
        base_price_cents: 20_000,
        volatility_pct: 15,
        pe_cents: (1_500, 4_500),
        pb_cents: (300, 1_300),
        roe_cents: (1_500, 3_500),
        market_cap: (1_000, 31_000),
    },
    IndustryProfile {
        industry: "new energy",
        name_parts: &["Sunrise", "Lithium", "Voltage", "Windward", "Cathode"],
        base_price_cents: 10_000,
        volatility_pct: 25,
        pe_cents: (2_000, 6_000),
        pb_cents: (300, 1_300),
        roe_cents: (1_000, 3_000),
        market_cap: (500, 20_500),
    },
    IndustryProfile {
        industry: "internet",
        name_parts: &["Cloudreach", "Linkwise", "Streamline", "Netcore", "Panorama"],
        base_price_cents: 15_000,
        volatility_pct: 22,
        pe_cents: (1_500, 4_500),
        pb_cents: (200, 1_000),
        roe_cents: (1_500, 4_000),
        market_cap: (1_000, 41_000),
    },
    IndustryProfile {
        industry: "pharmaceuticals",
        name_parts: &["Meridian", "Helix", "Remedy", "Vital", "Clearwater"],
        base_price_cents: 8_000,
        volatility_pct: 20,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
    IndustryProfile {
        industry: "technology",
        name_parts: &["Quantum", "Silicon", "Vertex", "Optic", "Kernel"],
        base_price_cents: 12_000,
        volatility_pct: 27,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
    IndustryProfile {
        industry: "automotive",
        name_parts: &["Torque", "Meridian Motors", "Eastway", "Axle", "Velocity"],
        base_price_cents: 5_000,
        volatility_pct: 17,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
    IndustryProfile {
        industry: "real estate",
        name_parts: &["Landmark", "Greenfield", "Cornerstone", "Skyline", "Harbor View"],
        base_price_cents: 1_500,
        volatility_pct: 12,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
    IndustryProfile {
        industry: "food & beverage",
        name_parts: &["Orchard", "Dairyland", "Golden Grain", "Purewater", "Hearth"],
        base_price_cents: 6_000,
        volatility_pct: 15,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
    IndustryProfile {
        industry: "chemicals",
        name_parts: &["Catalyst", "Polymer", "Basin", "Titania", "Northchem"],
        base_price_cents: 3_000,
        volatility_pct: 17,
        pe_cents: (1_000, 5_000),
        pb_cents: (100, 900),
        roe_cents: (500, 3_000),
        market_cap: (100, 5_100),
    },
];

/// Generates `count` records with the thread-local RNG.
pub fn generate_records(count: usize) -> Vec<StockRecord> {
    generate_with(&mut rand::thread_rng(), count)
}

/// Generates `count` records from the given RNG; seed it for reproducible
/// corpora.
pub fn generate_with<R: Rng>(rng: &mut R, count: usize) -> Vec<StockRecord> {
    (0..count).map(|i| record(rng, i + 1)).collect()
}

fn record<R: Rng>(rng: &mut R, serial: usize) -> StockRecord {
    let profile = &PROFILES[rng.gen_range(0..PROFILES.len())];

    let swing = rng.gen_range(-profile.volatility_pct..=profile.volatility_pct);
    let price_cents = profile.base_price_cents + profile.base_price_cents * swing / 100;

    StockRecord {
        code: format!("{serial:06}"),
        name: name(rng, profile),
        industry: profile.industry.to_string(),
        price: Decimal::new(price_cents.max(1), 2),
        change_percent: Decimal::new(rng.gen_range(-250..=250), 2),
        pe: cents(rng, profile.pe_cents),
        pb: cents(rng, profile.pb_cents),
        roe: cents(rng, profile.roe_cents),
        market_cap: Decimal::from(rng.gen_range(profile.market_cap.0..=profile.market_cap.1)),
        volume: Decimal::from(rng.gen_range(1_000_000..=500_000_000_i64)),
        turnover_rate: Decimal::new(rng.gen_range(20..=1_200), 2),
        // Not every real feed carries a volume ratio; mirror that.
        volume_ratio: rng
            .gen_bool(0.8)
            .then(|| Decimal::new(rng.gen_range(30..=300), 2)),
    }
}

fn cents<R: Rng>(rng: &mut R, (lo, hi): (i64, i64)) -> Decimal {
    Decimal::new(rng.gen_range(lo..=hi), 2)
}

fn name<R: Rng>(rng: &mut R, profile: &IndustryProfile) -> String {
    let first = profile.name_parts[rng.gen_range(0..profile.name_parts.len())];
    if rng.gen_bool(0.5) {
        let second = profile.name_parts[rng.gen_range(0..profile.name_parts.len())];
        if second != first {
            return format!("{first} {second}");
        }
    }
    first.to_string()
}

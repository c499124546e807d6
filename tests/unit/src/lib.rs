//! Helpers shared by the unit tests.
use passforge_password::{GenerationOptions, PasswordGenerator, RngSource};
use rand::{rngs::StdRng, SeedableRng};

/// Initialize a tracing subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "passforge=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init();
}

/// Generator with a seeded source so failures can be reproduced.
pub fn seeded(seed: u64) -> PasswordGenerator<RngSource<StdRng>> {
    PasswordGenerator::with_source(RngSource::new(StdRng::seed_from_u64(
        seed,
    )))
}

/// Every combination of the four class flags and two exclusion
/// flags that enables at least one class.
pub fn option_matrix(length: usize) -> Vec<GenerationOptions> {
    let mut matrix = Vec::new();
    for bits in 1u8..64 {
        let options = GenerationOptions {
            length,
            include_uppercase: bits & 1 != 0,
            include_lowercase: bits & 2 != 0,
            include_numbers: bits & 4 != 0,
            include_symbols: bits & 8 != 0,
            exclude_similar: bits & 16 != 0,
            exclude_ambiguous: bits & 32 != 0,
        };
        if options.enabled_classes() > 0 {
            matrix.push(options);
        }
    }
    matrix
}

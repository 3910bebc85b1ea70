pub mod doviz_provider;
pub mod exchange_rate;
pub mod harem_provider;
pub mod util;

use std::time::Duration;

pub(crate) const USER_AGENT: &str = "sarraf/0.1";

/// Timeout for the primary price feeds.
pub(crate) const PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);
/// Shorter timeout for the supplementary rate source; its failure only
/// costs the synthesized currencies, never the primary data.
pub(crate) const SUPPLEMENTARY_TIMEOUT: Duration = Duration::from_secs(5);

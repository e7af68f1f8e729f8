//! Network defaults for the SDK.

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Default portfolio service base URL.
pub const DEFAULT_PORTFOLIO_URL: &str = "https://api.1inch.dev/balance/v1.2";

/// Arbitrum One.
pub const DEFAULT_CHAIN_ID: u64 = 42161;

/// Arbitrum USDC.
pub const USDC: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";

/// Arbitrum USDT.
pub const USDT: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";

/// Arbitrum WETH.
pub const WETH: &str = "0x82aF49447D8a07e3bd95BD0d56f5241523fBab1a";

/// Token contracts queried by default when fetching portfolio balances.
pub const DEFAULT_SEED_TOKENS: [&str; 3] = [USDC, USDT, WETH];

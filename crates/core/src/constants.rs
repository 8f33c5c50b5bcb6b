/// Shareholder ID of the synthetic option pool bucket
pub const OPTION_POOL_ID: &str = "OPTION_POOL";

/// Display name of the synthetic option pool row
pub const OPTION_POOL_NAME: &str = "Option Pool";

/// Share class label shown for option pool shares
pub const OPTION_POOL_CLASS_LABEL: &str = "Options";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Tolerance for ownership percentage sums
pub const OWNERSHIP_SUM_TOLERANCE: &str = "0.01";

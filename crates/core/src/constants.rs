/// Decimal precision for aggregate calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for milestone progress display
pub const PROGRESS_DECIMAL_PRECISION: u32 = 1;

/// Default trailing window for wealth history queries, in days
pub const DEFAULT_HISTORY_DAYS: i64 = 90;

/// Trailing window used to derive monthly income/expense figures, in days
pub const CASH_FLOW_WINDOW_DAYS: i64 = 90;

/// Number of merged journal entries shown on the dashboard
pub const DASHBOARD_RECENT_EVENTS: usize = 5;

//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Coordinates
pub const FIELD_GROUP_INDEX: &str = "group_index";
pub const FIELD_ITEM_INDEX: &str = "item_index";

// Collection sizes
pub const FIELD_GROUP_COUNT: &str = "group_count";
pub const FIELD_ITEM_COUNT: &str = "item_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

//! Shared constants for the controls crate.

// ── Reorder ─────────────────────────────────────────────────────

/// Class carried by the row being dragged.
pub const DRAGGING_CLASS: &str = "dragging";

/// Class carried by the row currently under the pointer in pairwise-swap mode.
pub const DRAG_OVER_CLASS: &str = "drag-over";

// ── Hover preview ───────────────────────────────────────────────

/// Quiet period before a hover turns into a preview request.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Gap between the pointer and the tooltip corner, in CSS pixels.
pub const TOOLTIP_OFFSET_PX: f64 = 15.0;

/// Class of the floating tooltip element.
pub const TOOLTIP_CLASS: &str = "thumbnail-tooltip";

/// Class of the placeholder shown while a preview is loading.
pub const LOADING_CLASS: &str = "thumbnail-loading";

/// Class of the message shown when a preview cannot be loaded.
pub const ERROR_CLASS: &str = "thumbnail-error";

//! Drag-and-drop reorder state machine.
//!
//! `ReorderCore` tracks one drag session at a time for a single container. The
//! host forwards `dragstart` / `dragover` / `dragleave` / `drop` / `dragend`
//! events together with what it can read from the DOM (row ids, row boxes),
//! and executes the [`ReorderEffect`]s that come back. Persistence is also an
//! effect: the host performs the request and reports the outcome through
//! [`ReorderCore::on_persisted`].
//!
//! Two interaction modes are supported:
//!
//! - [`ReorderMode::InsertionPoint`]: the dragged row follows the pointer in
//!   the live DOM; dropping persists the full resulting order.
//! - [`ReorderMode::PairwiseSwap`]: nothing moves during the drag; dropping on
//!   another row persists a `{fromId, toId}` pair and leaves the reindexing
//!   policy to the server.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use serde::{Deserialize, Serialize};

use crate::error::ControlError;
use crate::geometry::{InsertionPoint, RowGeometry, insertion_point, is_in_place, is_permutation};

/// Interaction style of a reorderable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReorderMode {
    #[default]
    InsertionPoint,
    PairwiseSwap,
}

/// Body of the reorder `POST`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReorderRequest {
    /// Full new order, first row first.
    Order { order: Vec<String> },
    /// Move `from_id` to where `to_id` is; the server owns the exact semantics.
    Swap {
        #[serde(rename = "fromId")]
        from_id: String,
        #[serde(rename = "toId")]
        to_id: String,
    },
}

/// 1-based position label for a row after a successful reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabel {
    pub id: String,
    pub position: usize,
}

/// Work the host must perform on behalf of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderEffect {
    /// Add the dragging class to this row.
    MarkDragging(String),
    /// Add the drag-over class to this row.
    MarkDragOver(String),
    /// Remove the drag-over class from this row.
    UnmarkDragOver(String),
    /// Strip both presentational classes from every row in the container.
    ClearMarks,
    /// Move the row `id` in the live DOM.
    MoveRow { id: String, to: InsertionPoint },
    /// Send this request to the reorder endpoint.
    Persist(ReorderRequest),
    /// Rewrite the visible position labels.
    Relabel(Vec<RowLabel>),
    /// Reload the page to resynchronize with the server.
    Reload,
}

/// State that lives from drag-start to drag-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    dragged_id: String,
    snapshot: Vec<String>,
    over_id: Option<String>,
}

impl DragSession {
    #[must_use]
    pub fn dragged_id(&self) -> &str {
        &self.dragged_id
    }

    /// Row ids in container order at drag-start.
    #[must_use]
    pub fn snapshot(&self) -> &[String] {
        &self.snapshot
    }

    /// Row currently marked as the swap target, if any.
    #[must_use]
    pub fn over_id(&self) -> Option<&str> {
        self.over_id.as_deref()
    }
}

/// Reorder state for one container.
#[derive(Debug, Clone, Default)]
pub struct ReorderCore {
    mode: ReorderMode,
    session: Option<DragSession>,
}

impl ReorderCore {
    #[must_use]
    pub fn new(mode: ReorderMode) -> Self {
        Self { mode, session: None }
    }

    #[must_use]
    pub fn mode(&self) -> ReorderMode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a drag of row `id`. `snapshot` is the container's row order now.
    pub fn on_drag_start(&mut self, id: &str, snapshot: Vec<String>) -> Vec<ReorderEffect> {
        let mut effects = Vec::new();
        if let Some(stale) = self.session.take() {
            log::debug!("reorder: drag-start while '{}' was still dragging", stale.dragged_id);
            effects.push(ReorderEffect::ClearMarks);
        }
        log::debug!("reorder: drag-start '{id}' among {} rows", snapshot.len());
        self.session = Some(DragSession { dragged_id: id.to_owned(), snapshot, over_id: None });
        effects.push(ReorderEffect::MarkDragging(id.to_owned()));
        effects
    }

    /// Pointer moved over the container.
    ///
    /// `target_id` is the row under the pointer (if any) and `rows` is every
    /// row of the container in current DOM order, dragged row included.
    pub fn on_drag_over(&mut self, target_id: Option<&str>, pointer_y: f64, rows: &[RowGeometry]) -> Vec<ReorderEffect> {
        let mode = self.mode;
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match mode {
            ReorderMode::InsertionPoint => {
                let order: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
                if !order.contains(&session.dragged_id.as_str()) {
                    return Vec::new();
                }
                let point = insertion_point(rows, &session.dragged_id, pointer_y);
                if is_in_place(&order, &session.dragged_id, &point) {
                    return Vec::new();
                }
                vec![ReorderEffect::MoveRow { id: session.dragged_id.clone(), to: point }]
            }
            ReorderMode::PairwiseSwap => {
                let target = target_id.filter(|id| *id != session.dragged_id);
                if target == session.over_id.as_deref() {
                    return Vec::new();
                }
                let mut effects = Vec::new();
                if let Some(previous) = session.over_id.take() {
                    effects.push(ReorderEffect::UnmarkDragOver(previous));
                }
                if let Some(target) = target {
                    session.over_id = Some(target.to_owned());
                    effects.push(ReorderEffect::MarkDragOver(target.to_owned()));
                }
                effects
            }
        }
    }

    /// Pointer left row `target_id`.
    pub fn on_drag_leave(&mut self, target_id: &str) -> Vec<ReorderEffect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.over_id.as_deref() == Some(target_id) {
            session.over_id = None;
            return vec![ReorderEffect::UnmarkDragOver(target_id.to_owned())];
        }
        Vec::new()
    }

    /// Row dropped. `target_id` is the row under the pointer and `order` the
    /// container's row order after any live moves.
    pub fn on_drop(&mut self, target_id: Option<&str>, order: Vec<String>) -> Vec<ReorderEffect> {
        let mode = self.mode;
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match mode {
            ReorderMode::InsertionPoint => {
                if session.snapshot.len() < 2 {
                    log::debug!("reorder: nothing to reorder with {} rows", session.snapshot.len());
                    return Vec::new();
                }
                if !is_permutation(&session.snapshot, &order) {
                    log::warn!(
                        "reorder: drop order {order:?} does not match rows at drag-start {:?}",
                        session.snapshot
                    );
                    return vec![ReorderEffect::Reload];
                }
                vec![ReorderEffect::Persist(ReorderRequest::Order { order })]
            }
            ReorderMode::PairwiseSwap => {
                let mut effects = Vec::new();
                if let Some(previous) = session.over_id.take() {
                    effects.push(ReorderEffect::UnmarkDragOver(previous));
                }
                match target_id {
                    Some(to) if to != session.dragged_id => {
                        effects.push(ReorderEffect::Persist(ReorderRequest::Swap {
                            from_id: session.dragged_id.clone(),
                            to_id: to.to_owned(),
                        }));
                    }
                    _ => log::debug!("reorder: '{}' dropped without a swap target", session.dragged_id),
                }
                effects
            }
        }
    }

    /// Drag finished, whatever happened. Always clears the visual state.
    pub fn on_drag_end(&mut self) -> Vec<ReorderEffect> {
        if let Some(session) = self.session.take() {
            log::debug!("reorder: drag-end '{}'", session.dragged_id);
        }
        vec![ReorderEffect::ClearMarks]
    }

    /// Outcome of a [`ReorderEffect::Persist`] request.
    ///
    /// A stored full order relabels the rows in place. A stored swap reloads,
    /// because the resulting order is decided by the server. Any failure
    /// reloads and does nothing else.
    #[must_use]
    pub fn on_persisted(request: &ReorderRequest, outcome: Result<(), ControlError>) -> Vec<ReorderEffect> {
        match (request, outcome) {
            (ReorderRequest::Order { order }, Ok(())) => {
                let labels = order
                    .iter()
                    .enumerate()
                    .map(|(index, id)| RowLabel { id: id.clone(), position: index + 1 })
                    .collect();
                vec![ReorderEffect::Relabel(labels)]
            }
            (ReorderRequest::Swap { from_id, to_id }, Ok(())) => {
                log::debug!("reorder: swap {from_id} -> {to_id} stored, reloading for server order");
                vec![ReorderEffect::Reload]
            }
            (_, Err(err)) => {
                log::error!("reorder: failed to store new order: {err}");
                vec![ReorderEffect::Reload]
            }
        }
    }
}

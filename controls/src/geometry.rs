//! Insertion geometry for live reordering.
//!
//! Given the bounding boxes of the rows in a container (in their current
//! sequence order) and the pointer's Y coordinate, decide where the dragged row
//! belongs. The result is expressed relative to the other rows so the host can
//! perform the move with a single `insertBefore`/`appendChild`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Vertical extent of a row in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBox {
    pub top: f64,
    pub height: f64,
}

impl RowBox {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Y coordinate of the horizontal line splitting the row in half.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// A row's identifier together with its live bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry {
    pub id: String,
    pub bounds: RowBox,
}

impl RowGeometry {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), bounds: RowBox::new(top, height) }
    }
}

/// Where the dragged row should sit among the other rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Immediately before the row with this id.
    Before(String),
    /// After every other row.
    End,
}

/// First row (in sequence order, skipping `dragged_id`) whose midpoint lies
/// strictly below `pointer_y`; [`InsertionPoint::End`] when there is none.
#[must_use]
pub fn insertion_point(rows: &[RowGeometry], dragged_id: &str, pointer_y: f64) -> InsertionPoint {
    rows.iter()
        .filter(|row| row.id != dragged_id)
        .find(|row| pointer_y < row.bounds.midpoint())
        .map_or(InsertionPoint::End, |row| InsertionPoint::Before(row.id.clone()))
}

/// Whether `dragged_id` already sits at `point` within `order`.
///
/// Used to suppress moves that would leave the sequence unchanged, so repeated
/// drag-over events at the same pointer position never touch the DOM.
#[must_use]
pub fn is_in_place(order: &[&str], dragged_id: &str, point: &InsertionPoint) -> bool {
    let Some(index) = order.iter().position(|id| *id == dragged_id) else {
        return false;
    };
    match (point, order.get(index + 1)) {
        (InsertionPoint::Before(anchor), Some(next)) => anchor == next,
        (InsertionPoint::Before(_), None) => false,
        (InsertionPoint::End, next) => next.is_none(),
    }
}

/// Move `dragged_id` within `order` to `point`, as the DOM would after the
/// host performs the corresponding insert.
///
/// Unknown ids leave `order` untouched. An anchor equal to the dragged id is
/// treated as a no-op.
pub fn apply_move(order: &mut Vec<String>, dragged_id: &str, point: &InsertionPoint) {
    let Some(from) = order.iter().position(|id| id == dragged_id) else {
        return;
    };
    match point {
        InsertionPoint::End => {
            let moved = order.remove(from);
            order.push(moved);
        }
        InsertionPoint::Before(anchor) => {
            if anchor == dragged_id || !order.iter().any(|id| id == anchor) {
                return;
            }
            let moved = order.remove(from);
            let to = order.iter().position(|id| id == anchor).unwrap_or(order.len());
            order.insert(to, moved);
        }
    }
}

/// Check that `order` is a permutation of `expected`: same length, no
/// duplicates, no foreign ids.
#[must_use]
pub fn is_permutation(expected: &[String], order: &[String]) -> bool {
    if expected.len() != order.len() {
        return false;
    }
    let mut want: Vec<&str> = expected.iter().map(String::as_str).collect();
    let mut got: Vec<&str> = order.iter().map(String::as_str).collect();
    want.sort_unstable();
    got.sort_unstable();
    if got.windows(2).any(|pair| pair[0] == pair[1]) {
        return false;
    }
    want == got
}

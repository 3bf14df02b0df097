use super::{DrawCmd, SortKey};

/// A deferred primitive: sort key + canonical command.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Primitives recorded while defer mode is on.
///
/// Append-only between flushes. Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-flush
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DeferredQueue {
    items: Vec<DeferredItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DeferredQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DeferredItem] {
        &self.items
    }

    /// Appends `cmd` under `key`.
    ///
    /// Insertion order is preserved within equal keys; a later `push` with
    /// a different current key never reorders what is already queued.
    #[inline]
    pub fn push(&mut self, key: i64, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DeferredItem {
            key: SortKey::new(key, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in submission order (ascending key, stable within
    /// equal keys) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DeferredItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{RenderState, Rgba};
    use crate::coords::Vec2;
    use crate::scene::shapes::line::LineCmd;
    use crate::scene::Vertex;

    fn line(x: f32) -> DrawCmd {
        let v = Vertex::new(Vec2::new(x, 0.0), Rgba::white(), Vec2::zero());
        DrawCmd::Line(LineCmd::new(None, [v, v], RenderState::default()))
    }

    fn flushed_xs(queue: &mut DeferredQueue) -> Vec<f32> {
        queue
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.verts[0].position.x,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn flush_order_is_ascending_key_then_insertion() {
        // Submission order A,B,C,D with keys [2,1,2,1] must flush B,D,A,C.
        let mut queue = DeferredQueue::new();
        queue.push(2, line(0.0)); // A
        queue.push(1, line(1.0)); // B
        queue.push(2, line(2.0)); // C
        queue.push(1, line(3.0)); // D

        assert_eq!(flushed_xs(&mut queue), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn equal_keys_keep_painters_order() {
        let mut queue = DeferredQueue::new();
        for i in 0..8 {
            queue.push(7, line(i as f32));
        }
        assert_eq!(flushed_xs(&mut queue), (0..8).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn negative_keys_sort_before_zero() {
        let mut queue = DeferredQueue::new();
        queue.push(0, line(0.0));
        queue.push(-5, line(1.0));
        assert_eq!(flushed_xs(&mut queue), vec![1.0, 0.0]);
    }

    #[test]
    fn pushes_after_iteration_are_picked_up() {
        let mut queue = DeferredQueue::new();
        queue.push(1, line(0.0));
        assert_eq!(flushed_xs(&mut queue).len(), 1);

        queue.push(0, line(9.0));
        assert_eq!(flushed_xs(&mut queue), vec![9.0, 0.0]);
    }

    #[test]
    fn clear_empties_but_keeps_working() {
        let mut queue = DeferredQueue::new();
        queue.push(3, line(0.0));
        queue.clear();
        assert!(queue.is_empty());

        queue.push(1, line(4.0));
        assert_eq!(queue.len(), 1);
        assert_eq!(flushed_xs(&mut queue), vec![4.0]);
    }
}

use crate::coords::PixelRect;
use crate::paint::Color;

use super::{DrawCmd, ZIndex};

/// A draw command tagged with its paint layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one snapshot.
///
/// Items are painted by ascending layer, then in the order they were pushed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
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

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        self.items.push(DrawItem { z, cmd });
        self.sorted_dirty = true;
    }

    /// Records a whole-surface fill.
    #[inline]
    pub fn push_clear(&mut self, z: ZIndex, color: Color) {
        self.push(z, DrawCmd::Clear(color));
    }

    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: PixelRect, color: Color) {
        self.push(z, DrawCmd::Rect(rect, color));
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable sort: insertion order is kept within a layer.
        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].z);

        self.sorted_dirty = false;
    }
}

/// Paint layer of a draw item. Lower layers are painted first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(0);
    pub const BOUNDING_RECT: ZIndex = ZIndex(1);
    pub const FIGURES: ZIndex = ZIndex(2);
}

pub(crate) mod bounding_rect;
pub(crate) mod figure;
pub(crate) mod fill;

pub use bounding_rect::BoundingRect;
pub use figure::Figure;
pub use fill::Fill;

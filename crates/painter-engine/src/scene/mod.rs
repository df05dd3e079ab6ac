//! Scene model: operations, the Operation Table, the shared scene store and
//! the generator that turns the store into a drawn surface.
//!
//! Responsibilities:
//! - define the closed set of scene mutations (`Operation`)
//! - map command keywords to operation constructors (`table`)
//! - hold drawable elements behind one lock (`SceneStore`)
//! - record a per-frame draw stream with a fixed layer order (`DrawList`)
//! - keep shape-specific geometry isolated per shape file under `scene::shapes`

mod cmd;
mod generator;
mod list;
mod op;
mod store;
mod z_index;

pub mod shapes;
pub mod table;

pub use cmd::DrawCmd;
pub use generator::Generator;
pub use list::{DrawItem, DrawList};
pub use op::{Move, Operation};
pub use shapes::{BoundingRect, Figure, Fill};
pub use store::{FigureId, FigureRef, SceneStats, SceneStore};
pub use table::OpKind;
pub use z_index::ZIndex;

//! Painter engine crate.
//!
//! Owns the scene model and the execution pipeline that applies remotely
//! submitted operations to it:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scene`] | `Operation`, the Operation Table, `SceneStore`, `Generator` |
//! | [`exec`] | `OpQueue`, the execution `Loop`, `Receiver` / `SceneSink` ports |
//! | [`input`] | pointer events and the figure `DragHandler` |
//! | [`surface`] | render surface port and the CPU implementation |
//! | [`coords`], [`paint`] | geometry and color primitives |

pub mod coords;
pub mod exec;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;

mod sync;

pub use exec::{Loop, OpQueue, Receiver, SceneSink};
pub use scene::{Generator, Operation, SceneStore};

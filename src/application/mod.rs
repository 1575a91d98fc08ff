//! Application Layer
//!
//! Use cases that orchestrate the render flow: one retrieval through the
//! `MenuSource` port, one tree build, one active-path resolve. Business
//! rules live in the domain layer; this layer only coordinates.

mod render_menu;

pub use render_menu::{MenuRender, RenderMenuUseCase};

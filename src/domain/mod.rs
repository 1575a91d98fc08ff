//! Domain Layer
//!
//! The core of Treenav - pure menu logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The built forest (arena of nodes)
//! - `services/` - Tree builder, active-path resolver, URL policy
//! - `ports/` - Interfaces for the storage and routing collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - the full record set for one menu arrives as a value
//!    through the `MenuSource` port, in a single call
//! 2. **Pure Functions** - services are stateless and testable
//! 3. **Ports & Adapters** - storage and route reversing are injected

pub mod entities;
pub mod ports;
pub mod services;

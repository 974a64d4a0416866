//! Detail view subsystem.
//!
//! # Data Flow
//! ```text
//! slug
//!     → state.rs (lookup in snapshot, or upstream by-name fetch)
//!     → DetailState::{Loading, Found, NotFound}
//!     → view.rs (per-field fallbacks)
//!     → render::detail
//! ```

pub mod state;
pub mod view;

pub use state::{lookup, DetailState};
pub use view::{DetailView, Flag, Media, PostalCodeView};

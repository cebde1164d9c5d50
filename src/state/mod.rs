//! Client-side state for the cage management screen.
//!
//! DESIGN
//! ======
//! State is split by concern (`cages`, `cage_form`, `confirm`, `notify`) so
//! each dialog or table can depend on a small focused model. Pages wrap these
//! plain structs in `RwSignal`s; nothing here touches the network.

pub mod cage_form;
pub mod cages;
pub mod confirm;
pub mod filter;
pub mod notify;
pub mod pager;

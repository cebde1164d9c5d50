//! Reusable UI components for the cage management screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the table, dialogs and toasts from the screen signal and
//! report user intent back through callbacks owned by the page.

pub mod cage_form_dialog;
pub mod cage_table;
pub mod confirm_dialog;
pub mod toast_stack;

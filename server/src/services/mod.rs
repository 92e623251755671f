//! Service layer modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services hold the work behind route handlers. `contact` formats and
//! delivers inquiries; handlers stay thin and map errors to status codes.

pub mod contact;

//! Canonical domain types for zone generation.

mod record;
mod redirect_rule;
mod zone;

pub use record::Record;
pub use redirect_rule::RedirectRule;
pub use zone::Zone;

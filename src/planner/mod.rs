pub mod assembler;
pub mod constants;
pub mod distribution;
pub mod edit;
pub mod filter;
pub mod nutrition;
pub mod optimizer;
pub mod templates;

pub use assembler::assemble;
pub use constants::*;
pub use distribution::{distribution_for, slot_targets, validate_distributions, SlotShare};
pub use filter::{filter_by_preferences, passes_preferences};
pub use nutrition::calculate;
pub use optimizer::optimize_portions;
pub use templates::{resolve_template, select_template, template_variants, Template};

//! Rule catalog: ids, headings, categories and default severities.

mod category;
mod registry;

pub use category::Category;
pub use registry::RuleId;

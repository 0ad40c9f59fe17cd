//! C# source generation modules.

pub mod classes;
pub mod naming;
pub mod properties;
pub mod special;

pub use classes::ClassWriter;
pub use naming::{comment_text, doc_text, to_identifier};
pub use properties::Property;
pub use special::SpecialField;

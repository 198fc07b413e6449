pub mod string_tag_field;

pub use string_tag_field::{ReadonlyTagView, StringTagField, TagFieldConfig, TagInput};

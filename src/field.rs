//! Abstract form-field capability and field-level errors

use serde_json::Value;

/// Errors surfaced by field operations
///
/// Malformed values never error during normalization (they degrade to an
/// empty tag sequence); the variants here cover the record and wire seams.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	#[error("Field '{0}' is required")]
	Required(String),
	#[error("Validation error: {0}")]
	Validation(String),
	#[error("Failed to write tag record: {0}")]
	Save(String),
	#[error("Failed to encode response body: {0}")]
	Encode(#[from] serde_json::Error),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Capability interface implemented by form fields
///
/// Fields normalize submitted data through [`clean`](FormField::clean) and
/// describe themselves to an external renderer through
/// [`schema_data`](FormField::schema_data). Fields hold no reference to an
/// owning form or record; callers pass records explicitly where needed.
pub trait FormField {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str>;

	fn initial(&self) -> Option<&Value>;

	/// Normalize a submitted value into the field's canonical JSON shape
	fn clean(&self, value: Option<&Value>) -> FieldResult<Value>;

	/// Serialized configuration consumed by the rendering layer
	fn schema_data(&self) -> FieldResult<Value> {
		Ok(serde_json::json!({ "name": self.name() }))
	}

	fn has_changed(&self, initial: Option<&Value>, data: Option<&Value>) -> bool {
		match (initial, data) {
			(None, None) => false,
			(Some(_), None) | (None, Some(_)) => true,
			(Some(a), Some(b)) => a != b,
		}
	}
}

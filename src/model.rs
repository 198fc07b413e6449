//! Record abstraction backing tag persistence

use serde_json::Value;

/// Minimal contract for a mutable record with named columns
///
/// Mirrors what the tag field needs from an ORM model: read a column, assign
/// a column, and persist. Persistence of the record that owns the tag column
/// stays with the caller; [`save`](TagModel::save) is only invoked for tag
/// records created on the fly.
pub trait TagModel {
	fn get_field(&self, name: &str) -> Option<Value>;

	fn set_field(&mut self, name: &str, value: Value) -> Result<(), String>;

	fn save(&mut self) -> Result<(), String>;
}

/// A mutable collection of tag records, keyed by a title field
///
/// Stands in for the queryset backing tag resolution: lookup is an exact
/// match on the title column, and newly created tags are appended.
///
/// # Examples
///
/// ```
/// use tagfield::{TagModel, TagSourceList};
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct Tag {
///     title: String,
/// }
///
/// impl TagModel for Tag {
///     fn get_field(&self, name: &str) -> Option<Value> {
///         (name == "Title").then(|| Value::String(self.title.clone()))
///     }
///
///     fn set_field(&mut self, name: &str, value: Value) -> Result<(), String> {
///         match (name, value) {
///             ("Title", Value::String(title)) => {
///                 self.title = title;
///                 Ok(())
///             }
///             _ => Err(format!("unknown column: {}", name)),
///         }
///     }
///
///     fn save(&mut self) -> Result<(), String> {
///         Ok(())
///     }
/// }
///
/// let list = TagSourceList::with_records("Title", vec![Tag { title: "Rust".into() }]);
/// assert!(list.find("Rust").is_some());
/// assert!(list.find("Go").is_none());
/// ```
pub struct TagSourceList<T: TagModel> {
	title_field: String,
	records: Vec<T>,
}

impl<T: TagModel> TagSourceList<T> {
	pub fn new(title_field: impl Into<String>) -> Self {
		Self {
			title_field: title_field.into(),
			records: Vec::new(),
		}
	}

	pub fn with_records(title_field: impl Into<String>, records: Vec<T>) -> Self {
		Self {
			title_field: title_field.into(),
			records,
		}
	}

	pub fn title_field(&self) -> &str {
		&self.title_field
	}

	pub fn records(&self) -> &[T] {
		&self.records
	}

	pub fn push(&mut self, record: T) {
		self.records.push(record);
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Index of the first record whose title field equals `term` exactly
	pub fn position(&self, term: &str) -> Option<usize> {
		self.records.iter().position(|record| {
			matches!(record.get_field(&self.title_field), Some(Value::String(title)) if title == term)
		})
	}

	/// First record whose title field equals `term` exactly
	pub fn find(&self, term: &str) -> Option<&T> {
		self.position(term).map(|index| &self.records[index])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	#[derive(Default)]
	struct FakeTag {
		columns: HashMap<String, Value>,
	}

	impl FakeTag {
		fn titled(title: &str) -> Self {
			let mut tag = Self::default();
			tag.columns
				.insert("Title".to_string(), Value::String(title.to_string()));
			tag
		}
	}

	impl TagModel for FakeTag {
		fn get_field(&self, name: &str) -> Option<Value> {
			self.columns.get(name).cloned()
		}

		fn set_field(&mut self, name: &str, value: Value) -> Result<(), String> {
			self.columns.insert(name.to_string(), value);
			Ok(())
		}

		fn save(&mut self) -> Result<(), String> {
			Ok(())
		}
	}

	#[rstest]
	fn test_position_matches_exact_title() {
		// Arrange
		let list = TagSourceList::with_records(
			"Title",
			vec![FakeTag::titled("Tag1"), FakeTag::titled("Tag2")],
		);

		// Act & Assert
		assert_eq!(list.position("Tag2"), Some(1));
		assert_eq!(list.position("tag2"), None);
		assert_eq!(list.position("Tag"), None);
	}

	#[rstest]
	fn test_find_returns_first_match() {
		// Arrange
		let list = TagSourceList::with_records(
			"Title",
			vec![FakeTag::titled("Tag1"), FakeTag::titled("Tag1")],
		);

		// Act
		let found = list.find("Tag1");

		// Assert
		assert!(found.is_some());
		assert_eq!(list.position("Tag1"), Some(0));
	}

	#[rstest]
	fn test_empty_list_finds_nothing() {
		// Arrange
		let list = TagSourceList::<FakeTag>::new("Title");

		// Act & Assert
		assert!(list.is_empty());
		assert!(list.find("Tag1").is_none());
	}
}

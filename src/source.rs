//! Enumerable option sources for tag fields

use serde::{Deserialize, Serialize};

/// A single selectable option as a (title, value) pair
///
/// For plain string tags the title and value coincide; the pair shape exists
/// so keyed sources can carry a display label distinct from the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagOption {
	pub title: String,
	pub value: String,
}

impl TagOption {
	pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			value: value.into(),
		}
	}
}

/// The backing set of available tag values
///
/// Either a flat list of values (title == value) or a static association of
/// value to display label. Lazy iterators are materialized up front via
/// [`TagSource::collect`]; large sets should use lazy-load mode on the field
/// instead of an eager source.
///
/// # Examples
///
/// ```
/// use tagfield::TagSource;
///
/// let source = TagSource::from(vec!["Tag1", "Tag2"]);
/// let options = source.options();
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[0].title, "Tag1");
/// assert_eq!(options[0].value, "Tag1");
/// ```
#[derive(Debug, Clone)]
pub enum TagSource {
	Values(Vec<String>),
	Pairs(Vec<(String, String)>),
}

impl TagSource {
	/// Materialize an iterator of values into a source
	pub fn collect<I>(values: I) -> Self
	where
		I: IntoIterator<Item = String>,
	{
		Self::Values(values.into_iter().collect())
	}

	/// Resolve the source into an ordered option list
	///
	/// Recomputed on every call; option sets are assumed small and static.
	pub fn options(&self) -> Vec<TagOption> {
		match self {
			Self::Values(values) => values
				.iter()
				.map(|value| TagOption::new(value.clone(), value.clone()))
				.collect(),
			Self::Pairs(pairs) => pairs
				.iter()
				.map(|(value, label)| TagOption::new(label.clone(), value.clone()))
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Values(values) => values.len(),
			Self::Pairs(pairs) => pairs.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for TagSource {
	fn default() -> Self {
		Self::Values(Vec::new())
	}
}

impl From<Vec<String>> for TagSource {
	fn from(values: Vec<String>) -> Self {
		Self::Values(values)
	}
}

impl From<Vec<&str>> for TagSource {
	fn from(values: Vec<&str>) -> Self {
		Self::Values(values.into_iter().map(str::to_string).collect())
	}
}

impl From<Vec<(String, String)>> for TagSource {
	fn from(pairs: Vec<(String, String)>) -> Self {
		Self::Pairs(pairs)
	}
}

impl FromIterator<String> for TagSource {
	fn from_iter<I: IntoIterator<Item = String>>(values: I) -> Self {
		Self::collect(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_values_source_uses_value_as_title() {
		// Arrange
		let source = TagSource::from(vec!["Tag1", "Tag2"]);

		// Act
		let options = source.options();

		// Assert
		assert_eq!(options.len(), 2);
		assert_eq!(options[0], TagOption::new("Tag1", "Tag1"));
		assert_eq!(options[1], TagOption::new("Tag2", "Tag2"));
	}

	#[rstest]
	fn test_pairs_source_keeps_labels() {
		// Arrange
		let source = TagSource::from(vec![("rust".to_string(), "Rust".to_string())]);

		// Act
		let options = source.options();

		// Assert
		assert_eq!(options[0].title, "Rust");
		assert_eq!(options[0].value, "rust");
	}

	#[rstest]
	fn test_collect_materializes_iterator() {
		// Arrange
		let lazy = (1..=3).map(|n| format!("Tag{}", n));

		// Act
		let source = TagSource::collect(lazy);

		// Assert
		assert_eq!(source.len(), 3);
		assert_eq!(source.options()[2].value, "Tag3");
	}

	#[rstest]
	fn test_default_source_is_empty() {
		// Arrange & Act
		let source = TagSource::default();

		// Assert
		assert!(source.is_empty());
		assert!(source.options().is_empty());
	}

	#[rstest]
	fn test_option_serializes_with_pascal_case_keys() {
		// Arrange
		let option = TagOption::new("Tag1", "Tag1");

		// Act
		let json = serde_json::to_value(&option).unwrap();

		// Assert
		assert_eq!(json, serde_json::json!({ "Title": "Tag1", "Value": "Tag1" }));
	}
}

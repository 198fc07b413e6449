//! Tagging field storing comma-delimited tags in a record string column

use crate::field::{FieldError, FieldResult, FormField};
use crate::http::{Request, Response, join_links};
use crate::model::{TagModel, TagSourceList};
use crate::schema::{SuggestItem, SuggestResponse, TagFieldSchema};
use crate::source::{TagOption, TagSource};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Behavior flags and limits for a tag field
#[derive(Debug, Clone)]
pub struct TagFieldConfig {
	/// When true, the option set is not embedded in the schema; the widget
	/// fetches suggestions from the suggest endpoint instead.
	pub should_lazy_load: bool,
	/// Maximum number of suggestions returned per query.
	pub lazy_load_item_limit: usize,
	/// Whether submitting an unknown tag may create a new backing record.
	pub can_create: bool,
	/// Whether the widget submits multiple values (`name[]`).
	pub is_multiple: bool,
}

impl Default for TagFieldConfig {
	fn default() -> Self {
		Self {
			should_lazy_load: false,
			lazy_load_item_limit: 10,
			can_create: true,
			is_multiple: true,
		}
	}
}

/// Input accepted by [`StringTagField::set_value`]
///
/// Explicit dispatch over the value shapes the widget accepts, resolved in
/// [`set_value`](StringTagField::set_value) rather than by inspecting types
/// at runtime.
pub enum TagInput<'a> {
	/// A comma-delimited string, split on `,`
	Delimited(&'a str),
	/// A sequence of tag values used as-is
	Sequence(Vec<String>),
	/// A record whose column named after the field holds the delimited string
	Record(&'a dyn TagModel),
	/// Identifiers of related entities, rendered as decimal strings
	Relation(&'a [i64]),
}

/// Read-only presentation of a tag field
///
/// Joins the tags with `", "` for display, distinct from the bare-comma
/// machine serialization of [`StringTagField::data_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadonlyTagView {
	pub name: String,
	pub label: Option<String>,
	pub value: String,
}

/// A tagging widget over a plain string column
///
/// The field normalizes its value to an ordered sequence of non-empty tag
/// strings, serializes it back as a comma-joined string, and answers
/// autocomplete queries against a configured [`TagSource`].
///
/// A tag containing a comma corrupts the round trip: the serialization does
/// no escaping, and downstream consumers depend on the literal format.
///
/// # Examples
///
/// ```
/// use tagfield::{StringTagField, TagInput};
///
/// let mut field = StringTagField::new("Tags").with_source(vec!["Tag1", "Tag2"]);
/// field.set_value(TagInput::Delimited("Tag1,,Tag2"));
/// assert_eq!(field.value(), &["Tag1".to_string(), "Tag2".to_string()]);
/// assert_eq!(field.data_value(), "Tag1,Tag2");
/// ```
pub struct StringTagField {
	name: String,
	label: Option<String>,
	help_text: Option<String>,
	value: Vec<String>,
	source: TagSource,
	config: TagFieldConfig,
	link: Option<String>,
	disabled: bool,
	read_only: bool,
}

impl StringTagField {
	/// Create a new field with default configuration
	///
	/// # Examples
	///
	/// ```
	/// use tagfield::{FormField, StringTagField};
	///
	/// let field = StringTagField::new("Tags");
	/// assert_eq!(field.name(), "Tags");
	/// assert!(!field.should_lazy_load());
	/// assert_eq!(field.lazy_load_item_limit(), 10);
	/// assert!(field.can_create());
	/// assert!(field.is_multiple());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			value: Vec::new(),
			source: TagSource::default(),
			config: TagFieldConfig::default(),
			link: None,
			disabled: false,
			read_only: false,
		}
	}

	/// Set the option source
	pub fn with_source(mut self, source: impl Into<TagSource>) -> Self {
		self.source = source.into();
		self
	}

	/// Replace the whole configuration
	pub fn with_config(mut self, config: TagFieldConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_lazy_load(mut self, should_lazy_load: bool) -> Self {
		self.config.should_lazy_load = should_lazy_load;
		self
	}

	pub fn with_lazy_load_item_limit(mut self, limit: usize) -> Self {
		self.config.lazy_load_item_limit = limit;
		self
	}

	pub fn with_can_create(mut self, can_create: bool) -> Self {
		self.config.can_create = can_create;
		self
	}

	pub fn with_multiple(mut self, is_multiple: bool) -> Self {
		self.config.is_multiple = is_multiple;
		self
	}

	/// Set the base link used to build the suggest URL
	pub fn with_link(mut self, link: impl Into<String>) -> Self {
		self.link = Some(link.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn with_read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	pub fn should_lazy_load(&self) -> bool {
		self.config.should_lazy_load
	}

	pub fn lazy_load_item_limit(&self) -> usize {
		self.config.lazy_load_item_limit
	}

	pub fn can_create(&self) -> bool {
		self.config.can_create
	}

	pub fn is_multiple(&self) -> bool {
		self.config.is_multiple
	}

	pub fn config(&self) -> &TagFieldConfig {
		&self.config
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	/// Current tag sequence, insertion order preserved
	pub fn value(&self) -> &[String] {
		&self.value
	}

	/// Assign the field value from any accepted input shape
	///
	/// Never fails: after resolving the variant, empty entries are dropped
	/// and malformed input degrades to an empty sequence.
	///
	/// # Examples
	///
	/// ```
	/// use tagfield::{StringTagField, TagInput};
	///
	/// let mut field = StringTagField::new("Tags");
	///
	/// field.set_value(TagInput::Sequence(vec!["Tag1".into(), "".into(), "Tag2".into()]));
	/// assert_eq!(field.value(), &["Tag1".to_string(), "Tag2".to_string()]);
	///
	/// field.set_value(TagInput::Relation(&[3, 7]));
	/// assert_eq!(field.value(), &["3".to_string(), "7".to_string()]);
	/// ```
	pub fn set_value(&mut self, input: TagInput<'_>) {
		let tags = match input {
			TagInput::Delimited(raw) => split_tags(raw),
			TagInput::Sequence(values) => values,
			TagInput::Record(record) => match record.get_field(&self.name) {
				Some(Value::String(raw)) => split_tags(&raw),
				_ => Vec::new(),
			},
			TagInput::Relation(ids) => ids.iter().map(|id| id.to_string()).collect(),
		};

		self.value = tags.into_iter().filter(|tag| !tag.is_empty()).collect();
	}

	/// Comma-joined serialization written into the backing column
	///
	/// Embedded commas are not escaped; see the type-level docs.
	pub fn data_value(&self) -> String {
		self.value.join(",")
	}

	/// Write the serialized value into the record column named by the field
	///
	/// Column assignment only; persisting the record stays with the caller.
	pub fn save_into(&self, record: &mut dyn TagModel) -> FieldResult<()> {
		record
			.set_field(&self.name, Value::String(self.data_value()))
			.map_err(FieldError::Save)
	}

	/// The configured option source resolved into (title, value) pairs
	pub fn options(&self) -> Vec<TagOption> {
		self.source.options()
	}

	/// URL of the suggest endpoint for this field
	pub fn suggest_url(&self) -> String {
		match &self.link {
			Some(link) => join_links([link.as_str(), "suggest"]),
			None => format!("/{}/suggest", self.name),
		}
	}

	/// Schema object consumed by the front-end renderer
	///
	/// Eager fields embed the full option list; lazy fields point the widget
	/// at the suggest endpoint instead.
	pub fn schema_data_defaults(&self) -> TagFieldSchema {
		let mut schema = TagFieldSchema {
			name: if self.config.is_multiple {
				format!("{}[]", self.name)
			} else {
				self.name.clone()
			},
			lazy_load: self.config.should_lazy_load,
			creatable: self.config.can_create,
			multi: self.config.is_multiple,
			value: self.format_value(),
			disabled: self.disabled || self.read_only,
			options: None,
			option_url: None,
		};

		if self.config.should_lazy_load {
			schema.option_url = Some(self.suggest_url());
		} else {
			schema.options = Some(self.options());
		}

		schema
	}

	/// Current value rendered as (title, value) pairs for the widget
	fn format_value(&self) -> Vec<TagOption> {
		self.value
			.iter()
			.map(|tag| TagOption::new(tag.clone(), tag.clone()))
			.collect()
	}

	/// Suggestions whose value contains `term` as a case-insensitive substring
	///
	/// Deduplicated by value (first occurrence wins), truncated to the lazy
	/// load item limit, in source order. An empty term matches everything.
	pub fn tags(&self, term: &str) -> Vec<SuggestItem> {
		let needle = term.to_lowercase();
		let mut seen = HashSet::new();
		let mut items = Vec::new();

		for option in self.options() {
			if items.len() >= self.config.lazy_load_item_limit {
				break;
			}
			if !option.value.to_lowercase().contains(&needle) {
				continue;
			}
			if !seen.insert(option.value.clone()) {
				continue;
			}
			items.push(SuggestItem {
				id: option.title,
				text: option.value,
			});
		}

		items
	}

	/// Answer a suggest request with a JSON item list
	///
	/// Responds to `GET <link>/suggest?term=<string>` with
	/// `{"items": [{"id": ..., "text": ...}, ...]}`. An unmatched term yields
	/// an empty list; only JSON encoding failures error.
	pub fn suggest(&self, request: &Request) -> FieldResult<Response> {
		let term = request.query_param("term").unwrap_or_default();
		let items = self.tags(&term);
		tracing::debug!(
			field = %self.name,
			term = %term,
			count = items.len(),
			"Serving tag suggestions"
		);

		Ok(Response::json(&SuggestResponse { items })?)
	}

	/// Find the record whose title field equals `term`, creating it if allowed
	///
	/// Returns `Ok(None)` when no record matches and creation is disabled;
	/// callers must treat that as "tag not available", not as an error.
	/// Creation assigns the term to the title field, persists the record and
	/// appends it to the list. Two concurrent requests submitting the same
	/// new tag can both pass the lookup and create duplicate records; the
	/// lookup-then-create sequence is not atomic.
	pub fn get_or_create_tag<'a, T>(
		&self,
		source: &'a mut TagSourceList<T>,
		term: &str,
	) -> FieldResult<Option<&'a T>>
	where
		T: TagModel + Default,
	{
		if let Some(index) = source.position(term) {
			return Ok(Some(&source.records()[index]));
		}

		if !self.config.can_create {
			tracing::debug!(field = %self.name, term = %term, "Unknown tag and creation disabled");
			return Ok(None);
		}

		let mut record = T::default();
		record
			.set_field(source.title_field(), Value::String(term.to_string()))
			.map_err(FieldError::Save)?;
		record.save().map_err(FieldError::Save)?;
		tracing::debug!(field = %self.name, term = %term, "Created new tag record");

		source.push(record);
		Ok(source.records().last())
	}

	/// Non-editable presentation of the current tags
	///
	/// # Examples
	///
	/// ```
	/// use tagfield::{StringTagField, TagInput};
	///
	/// let mut field = StringTagField::new("Tags");
	/// field.set_value(TagInput::Delimited("Tag1,Tag2"));
	/// assert_eq!(field.readonly_view().value, "Tag1, Tag2");
	/// ```
	pub fn readonly_view(&self) -> ReadonlyTagView {
		ReadonlyTagView {
			name: self.name.clone(),
			label: self.label.clone(),
			value: self.value.join(", "),
		}
	}
}

/// Split a comma-delimited string into raw tag segments
fn split_tags(raw: &str) -> Vec<String> {
	raw.split(',').map(str::to_string).collect()
}

impl FormField for StringTagField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		false
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn initial(&self) -> Option<&Value> {
		None
	}

	/// Normalize null/string/array input to an array of non-empty tags
	///
	/// Unknown tags are deliberately accepted: created tags are labels, not
	/// keys of the option set, so no option membership check applies here.
	fn clean(&self, value: Option<&Value>) -> FieldResult<Value> {
		let tags: Vec<String> = match value {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::String(raw)) => split_tags(raw),
			Some(Value::Array(entries)) => entries
				.iter()
				.filter_map(|entry| entry.as_str().map(str::to_string))
				.collect(),
			Some(_) => Vec::new(),
		};

		Ok(Value::Array(
			tags.into_iter()
				.filter(|tag| !tag.is_empty())
				.map(Value::String)
				.collect(),
		))
	}

	fn schema_data(&self) -> FieldResult<Value> {
		Ok(serde_json::to_value(self.schema_data_defaults())?)
	}
}

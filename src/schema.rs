//! Renderer schema contract and suggestion wire types

use crate::source::TagOption;
use serde::{Deserialize, Serialize};

/// Serialized field configuration consumed by the front-end tag widget
///
/// The key names are the interoperability contract with the renderer: eager
/// fields carry the full `options` list, lazy fields carry `optionUrl`
/// pointing at the suggest endpoint instead.
#[derive(Debug, Clone, Serialize)]
pub struct TagFieldSchema {
	pub name: String,
	#[serde(rename = "lazyLoad")]
	pub lazy_load: bool,
	pub creatable: bool,
	pub multi: bool,
	pub value: Vec<TagOption>,
	pub disabled: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<TagOption>>,
	#[serde(rename = "optionUrl", skip_serializing_if = "Option::is_none")]
	pub option_url: Option<String>,
}

/// One autocomplete suggestion
///
/// `id` carries the option title and `text` the option value; for plain
/// string tags the two are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestItem {
	pub id: String,
	pub text: String,
}

/// Body of a suggest endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
	pub items: Vec<SuggestItem>,
}

//! Helpers for reading dynamically decoded SCALE values.
//!
//! Storage entries and event fields are decoded against runtime metadata into
//! [`Value`]s. These helpers walk that tree without assuming a particular
//! runtime version, tolerating the shapes older and newer runtimes produce.

use subxt::dynamic::Value;
use subxt::ext::scale_value::{Composite, Primitive, ValueDef};

/// Returns the variant name and its fields if `value` is a variant
pub fn as_variant(value: &Value) -> Option<(&str, &Composite<()>)> {
	match &value.value {
		ValueDef::Variant(variant) => Some((variant.name.as_str(), &variant.values)),
		_ => None,
	}
}

/// Returns the fields if `value` is a composite
pub fn as_composite(value: &Value) -> Option<&Composite<()>> {
	match &value.value {
		ValueDef::Composite(composite) => Some(composite),
		_ => None,
	}
}

/// Looks up a named field of a composite.
///
/// Substrate metadata uses `snake_case` field names; camelCase is accepted as well
/// so values produced by other tooling can be fed through the same path.
pub fn field<'a>(composite: &'a Composite<()>, name: &str) -> Option<&'a Value> {
	match composite {
		Composite::Named(fields) => fields
			.iter()
			.find(|(field_name, _)| field_name == name || to_snake_case(field_name) == name)
			.map(|(_, value)| value),
		Composite::Unnamed(_) => None,
	}
}

/// Returns the single inner value of a one-field composite, named or not
pub fn single_field(composite: &Composite<()>) -> Option<&Value> {
	let mut values = composite.values();
	let first = values.next()?;
	values.next().is_none().then_some(first)
}

/// Unwraps `Some(x)` / `None` variants. Any other value counts as present.
///
/// Returns `None` for `None`, `Some(inner)` otherwise.
pub fn option_inner(value: &Value) -> Option<&Value> {
	match as_variant(value) {
		Some(("None", _)) => None,
		Some(("Some", fields)) => single_field(fields).or(Some(value)),
		_ => Some(value),
	}
}

/// Reads an unsigned integer, unwrapping single-field wrappers such as
/// `Compact<u32>` or newtype structs.
pub fn as_unsigned(value: &Value) -> Option<u128> {
	match &value.value {
		ValueDef::Primitive(Primitive::U128(number)) => Some(*number),
		ValueDef::Primitive(Primitive::I128(number)) => u128::try_from(*number).ok(),
		ValueDef::Composite(composite) => single_field(composite).and_then(as_unsigned),
		_ => None,
	}
}

/// Reads a string primitive
pub fn as_string(value: &Value) -> Option<&str> {
	match &value.value {
		ValueDef::Primitive(Primitive::String(text)) => Some(text.as_str()),
		_ => None,
	}
}

/// Flattens a (possibly nested) composite of `u8` values into bytes.
///
/// `AccountId32` decodes as `([u8; 32])`, i.e. a one-field composite wrapping
/// an unnamed composite of 32 numbers.
pub fn as_bytes(value: &Value) -> Option<Vec<u8>> {
	match &value.value {
		ValueDef::Primitive(Primitive::U128(number)) => u8::try_from(*number).ok().map(|b| vec![b]),
		ValueDef::Composite(composite) => {
			let mut bytes = Vec::new();
			for inner in composite.values() {
				bytes.extend(as_bytes(inner)?);
			}
			Some(bytes)
		}
		_ => None,
	}
}

fn to_snake_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 4);
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			out.push('_');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}

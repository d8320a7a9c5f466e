//! In-place list mutation
//!
//! `append` and `extend` only check the element type. They skip the
//! mutators and the extra validator.

use super::raw::{RawValue, ValueKind};
use super::typed::ListValue;
use crate::error::SokResult;

impl ListValue {
	/// Required element kind, if any
	pub fn element_type(&self) -> Option<ValueKind> {
		self.rules.element_type
	}

	/// Push one element; an unset list starts out empty
	pub fn append(&mut self, item: impl Into<RawValue>) -> SokResult<()> {
		let item = item.into();
		let index = self.current.as_ref().map_or(0, Vec::len);
		self.rules.check_element(index, &item)?;
		self.current.get_or_insert_with(Vec::new).push(item);
		Ok(())
	}

	/// Push several elements, all of them or none
	pub fn extend<I>(&mut self, items: I) -> SokResult<()>
	where
		I: IntoIterator,
		I::Item: Into<RawValue>,
	{
		let items: Vec<RawValue> = items.into_iter().map(Into::into).collect();
		if items.is_empty() {
			return Ok(());
		}
		let offset = self.current.as_ref().map_or(0, Vec::len);
		for (index, item) in items.iter().enumerate() {
			self.rules.check_element(offset + index, item)?;
		}
		self.current.get_or_insert_with(Vec::new).extend(items);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.current.as_ref().map_or(0, Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}


// vim: ts=4

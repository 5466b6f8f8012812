//! Parameter sources: where option values come from.
//!
//! Template data arrives in two shapes: key/value mappings (dictionaries,
//! JSON objects) and plain structs with named fields. Rather than inspecting
//! types at the call site, the [`builder`](crate::builder) pulls values
//! through one capability, [`ParamSource`], and each shape gets an adapter:
//!
//! - mappings implement it directly (`HashMap`, `BTreeMap`,
//!   [`serde_json::Map`], object-shaped [`serde_json::Value`]);
//! - structs go through [`Fields`], which projects any `Serialize` type into
//!   a JSON object once and reads fields from that;
//! - [`AvatarOptions`] implements it for callers who built typed values.
//!
//! Values are exchanged as [`serde_json::Value`] — the common denominator of
//! both shapes. Unknown keys in a source are simply never asked for.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

use crate::params::AvatarOptions;

/// The three options an avatar URL understands, in the order they appear in
/// the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Size,
    Rating,
    Default,
}

impl OptionKind {
    /// Query-string order: `s`, then `r`, then `d`.
    pub const ALL: [OptionKind; 3] = [OptionKind::Size, OptionKind::Rating, OptionKind::Default];

    /// The long name a mapping or struct field uses.
    pub fn name(self) -> &'static str {
        match self {
            OptionKind::Size => "size",
            OptionKind::Rating => "rating",
            OptionKind::Default => "default",
        }
    }

    /// The single-letter query-parameter key.
    pub fn wire_key(self) -> &'static str {
        match self {
            OptionKind::Size => "s",
            OptionKind::Rating => "r",
            OptionKind::Default => "d",
        }
    }
}

/// Anything that can answer "what value, if any, was supplied for this
/// option?". Implementations return the value as found; validation and
/// default suppression are the builder's job.
pub trait ParamSource {
    fn param(&self, option: OptionKind) -> Option<Value>;
}

/// No parameters. `build_url(email, &())` yields the bare avatar URL.
impl ParamSource for () {
    fn param(&self, _option: OptionKind) -> Option<Value> {
        None
    }
}

impl<S: std::hash::BuildHasher> ParamSource for HashMap<String, Value, S> {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.get(option.name()).cloned()
    }
}

impl<'a, S: std::hash::BuildHasher> ParamSource for HashMap<&'a str, Value, S> {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.get(option.name()).cloned()
    }
}

impl ParamSource for BTreeMap<String, Value> {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.get(option.name()).cloned()
    }
}

impl ParamSource for serde_json::Map<String, Value> {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.get(option.name()).cloned()
    }
}

/// Only object values yield parameters; any other JSON shape is an empty
/// source.
impl ParamSource for Value {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.as_object().and_then(|map| map.get(option.name())).cloned()
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param(&self, option: OptionKind) -> Option<Value> {
        (**self).param(option)
    }
}

impl ParamSource for AvatarOptions {
    fn param(&self, option: OptionKind) -> Option<Value> {
        match option {
            OptionKind::Size => self.size.map(|s| Value::from(s.get())),
            OptionKind::Rating => self.rating.map(|r| Value::from(r.as_str())),
            OptionKind::Default => self
                .default
                .as_ref()
                .map(|d| Value::from(d.as_query_value())),
        }
    }
}

/// Struct adapter: treats the named fields of any `Serialize` type as
/// parameters.
///
/// The value is projected to JSON once at construction; field reads are then
/// plain map lookups. Types that serialize to something other than an object
/// act as an empty source.
pub struct Fields(Value);

impl Fields {
    pub fn new<T: Serialize>(params: T) -> Self {
        Self(serde_json::to_value(params).unwrap_or(Value::Null))
    }
}

impl ParamSource for Fields {
    fn param(&self, option: OptionKind) -> Option<Value> {
        self.0.param(option)
    }
}

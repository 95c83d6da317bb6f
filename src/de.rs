//! Reading Rust values out of papr node trees.
//!
//! [`Deserializer`] borrows the children of a node and interprets them
//! according to what the target type asks for:
//!
//! - a single value child is a scalar; numbers, booleans and chars are parsed
//!   from its text
//! - keys (and bare values standing for keys with no content) form a map or
//!   struct
//! - groups form a sequence; any other non-empty content is read as a
//!   sequence of one element, since a one-element array simplifies away its
//!   group
//! - no children at all is `None`, an empty sequence, or an empty string
//!
//! Self-describing targets such as `serde_json::Value` see scalars as strings,
//! keyed content as maps, groups as arrays and empty content as unit.
//!
//! ```rust
//! use papr::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Member { name: String, age: u32 }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Club { members: Vec<Member> }
//!
//! let club: Club = from_str(
//!     "members: name: John\n         age: 42\n       : name: Jane\n         age: 37\n",
//! ).unwrap();
//! assert_eq!(club.members[1], Member { name: "Jane".to_string(), age: 37 });
//! ```

use crate::{Error, Node, NodeKind, Result};
use serde::de::{self, value::BorrowedStrDeserializer, Visitor};
use std::str::FromStr;

/// A serde deserializer over the content of one node.
#[derive(Clone, Copy, Debug)]
pub struct Deserializer<'de> {
    content: &'de [Node],
}

impl<'de> Deserializer<'de> {
    /// Creates a deserializer for `node`.
    ///
    /// A value node is read as the scalar it holds; any other node is read
    /// through its children.
    #[must_use]
    pub fn new(node: &'de Node) -> Self {
        let content = if node.is_value() {
            std::slice::from_ref(node)
        } else {
            node.children()
        };
        Deserializer { content }
    }

    fn from_content(content: &'de [Node]) -> Self {
        Deserializer { content }
    }

    fn scalar(&self) -> Option<&'de str> {
        match self.content {
            [only] if only.is_value() => Some(only.text()),
            _ => None,
        }
    }

    fn is_sequence(&self) -> bool {
        !self.content.is_empty() && self.content.iter().all(Node::is_group)
    }

    fn describe(&self) -> String {
        if let Some(text) = self.scalar() {
            format!("{text:?}")
        } else if self.content.is_empty() {
            "empty content".to_string()
        } else if self.is_sequence() {
            format!("an array of {} elements", self.content.len())
        } else {
            "nested fields".to_string()
        }
    }

    fn expect_scalar(&self, expected: &str) -> Result<&'de str> {
        self.scalar()
            .ok_or_else(|| Error::type_mismatch(expected, &self.describe()))
    }

    fn parse_scalar<T: FromStr>(&self, expected: &str) -> Result<T> {
        let text = self.expect_scalar(expected)?;
        text.parse()
            .map_err(|_| Error::type_mismatch(expected, &format!("{text:?}")))
    }

    fn elements(&self) -> SeqAccess<'de> {
        let elements = if self.is_sequence() {
            self.content.iter().map(Node::children).collect()
        } else if self.content.is_empty() {
            Vec::new()
        } else {
            vec![self.content]
        };
        SeqAccess {
            elements: elements.into_iter(),
        }
    }
}

/// Parses a scalar for each listed method via `FromStr`.
macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident($ty:ty),)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                visitor.$visit(self.parse_scalar::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if let Some(text) = self.scalar() {
            visitor.visit_borrowed_str(text)
        } else if self.content.is_empty() {
            visitor.visit_unit()
        } else if self.is_sequence() {
            visitor.visit_seq(self.elements())
        } else {
            visitor.visit_map(MapAccess::new(self.content))
        }
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool(bool),
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
        deserialize_char => visit_char(char),
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.content.is_empty() {
            return visitor.visit_borrowed_str("");
        }
        visitor.visit_borrowed_str(self.expect_scalar("string")?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.content.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(self.elements())
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.is_sequence() {
            return Err(Error::type_mismatch("fields", &self.describe()));
        }
        visitor.visit_map(MapAccess::new(self.content))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.content {
            [only] if only.kind() == NodeKind::Value => visitor.visit_enum(EnumAccess {
                variant: only.text(),
                content: &[],
            }),
            [only] if only.kind() == NodeKind::Key => visitor.visit_enum(EnumAccess {
                variant: only.text(),
                content: only.children(),
            }),
            _ => Err(Error::type_mismatch("enum variant", &self.describe())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

pub struct SeqAccess<'de> {
    elements: std::vec::IntoIter<&'de [Node]>,
}

impl<'de> de::SeqAccess<'de> for SeqAccess<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        self.elements
            .next()
            .map(|content| seed.deserialize(Deserializer::from_content(content)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

pub struct MapAccess<'de> {
    entries: std::slice::Iter<'de, Node>,
    value: Option<&'de [Node]>,
}

impl<'de> MapAccess<'de> {
    fn new(content: &'de [Node]) -> Self {
        MapAccess {
            entries: content.iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        let Some(entry) = self.entries.next() else {
            return Ok(None);
        };

        // A bare value in keyed content is a key whose content is empty.
        let content: &'de [Node] = match entry.kind() {
            NodeKind::Key => entry.children(),
            NodeKind::Value => &[],
            NodeKind::Group | NodeKind::Root => {
                return Err(Error::type_mismatch("field", "an array element"));
            }
        };
        self.value = Some(content);

        seed.deserialize(KeyDeserializer { key: entry.text() })
            .map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let content = self
            .value
            .take()
            .ok_or_else(|| Error::custom("next_value_seed called before next_key_seed"))?;
        seed.deserialize(Deserializer::from_content(content))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

pub struct EnumAccess<'de> {
    variant: &'de str,
    content: &'de [Node],
}

impl<'de> de::EnumAccess<'de> for EnumAccess<'de> {
    type Error = Error;
    type Variant = VariantAccess<'de>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, VariantAccess<'de>)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(BorrowedStrDeserializer::<Error>::new(self.variant))?;
        Ok((
            variant,
            VariantAccess {
                content: Deserializer::from_content(self.content),
            },
        ))
    }
}

pub struct VariantAccess<'de> {
    content: Deserializer<'de>,
}

impl<'de> de::VariantAccess<'de> for VariantAccess<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.content)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.content, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.content, visitor)
    }
}

/// Map keys are plain text, but may stand for numbers or booleans.
struct KeyDeserializer<'de> {
    key: &'de str,
}

impl<'de> KeyDeserializer<'de> {
    fn parse_scalar<T: FromStr>(&self, expected: &str) -> Result<T> {
        self.key
            .parse()
            .map_err(|_| Error::type_mismatch(expected, &format!("key {:?}", self.key)))
    }
}

impl<'de> de::Deserializer<'de> for KeyDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.key)
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool(bool),
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
        deserialize_char => visit_char(char),
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(EnumAccess {
            variant: self.key,
            content: &[],
        })
    }

    serde::forward_to_deserialize_any! {
        str string bytes byte_buf option unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

/// Deserializes an instance of `T` from a node.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when the tree's shape or a scalar's text
/// does not fit `T`, or any custom error raised by `T`'s implementation.
pub fn from_node<'de, T>(node: &'de Node) -> Result<T>
where
    T: de::Deserialize<'de>,
{
    T::deserialize(Deserializer::new(node))
}

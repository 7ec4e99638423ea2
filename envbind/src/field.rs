//! Field descriptors and the slots values are written into.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

/// Kind of value a field holds.
///
/// The set is closed. Declared types the coercer cannot handle are reported
/// as [`FieldKind::Unsupported`] instead of failing at compile time, so a
/// struct with such a field still binds up to the point the field is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer { bits: u32 },
    Float { bits: u32 },
    Bool,
    String,
    ByteBuffer,
    Duration,
    Unsupported { type_name: &'static str },
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { bits } => write!(f, "i{bits}"),
            Self::Float { bits } => write!(f, "f{bits}"),
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::ByteBuffer => f.write_str("bytes"),
            Self::Duration => f.write_str("duration"),
            Self::Unsupported { type_name } => write!(f, "unsupported ({type_name})"),
        }
    }
}

/// Mutable reference to a signed integer field.
#[derive(Debug)]
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

impl IntSlot<'_> {
    pub fn bits(&self) -> u32 {
        match self {
            Self::I8(_) => i8::BITS,
            Self::I16(_) => i16::BITS,
            Self::I32(_) => i32::BITS,
            Self::I64(_) => i64::BITS,
            Self::Isize(_) => isize::BITS,
        }
    }
}

/// Mutable reference to a floating point field.
#[derive(Debug)]
pub enum FloatSlot<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl FloatSlot<'_> {
    pub fn bits(&self) -> u32 {
        match self {
            Self::F32(_) => 32,
            Self::F64(_) => 64,
        }
    }
}

/// Destination of a coerced value: a mutable borrow of one struct field,
/// tagged with its kind.
#[derive(Debug)]
pub enum Slot<'a> {
    Int(IntSlot<'a>),
    Float(FloatSlot<'a>),
    Bool(&'a mut bool),
    String(&'a mut String),
    Bytes(&'a mut Vec<u8>),
    Duration(&'a mut Duration),
    Unsupported { type_name: &'static str },
}

impl Slot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(slot) => FieldKind::Integer { bits: slot.bits() },
            Self::Float(slot) => FieldKind::Float { bits: slot.bits() },
            Self::Bool(_) => FieldKind::Bool,
            Self::String(_) => FieldKind::String,
            Self::Bytes(_) => FieldKind::ByteBuffer,
            Self::Duration(_) => FieldKind::Duration,
            Self::Unsupported { type_name } => FieldKind::Unsupported {
                type_name: *type_name,
            },
        }
    }
}

/// Types that can be the destination of an environment binding.
///
/// Implemented for every supported leaf type. A handful of common types that
/// are *not* supported (unsigned integers, `Option<T>`, `Vec<T>` of anything
/// but `u8`) implement it by returning [`Slot::Unsupported`], which makes
/// binding them fail with [`crate::EnvError::Unsupported`].
pub trait Bindable {
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! int_bindable {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Int(IntSlot::$variant(self))
                }
            }
        )*
    };
}

int_bindable!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);

impl Bindable for f32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(FloatSlot::F32(self))
    }
}

impl Bindable for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(FloatSlot::F64(self))
    }
}

impl Bindable for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Bindable for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::String(self)
    }
}

impl Bindable for Duration {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Duration(self)
    }
}

macro_rules! unsupported {
    ($($ty:ty),*) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported { type_name: type_name::<$ty>() }
                }
            }
        )*
    };
}

unsupported!(u8, u16, u32, u64, u128, usize, i128, char);

impl<T: 'static> Bindable for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        match (self as &mut dyn Any).downcast_mut::<Vec<u8>>() {
            Some(bytes) => Slot::Bytes(bytes),
            None => Slot::Unsupported {
                type_name: type_name::<Self>(),
            },
        }
    }
}

impl<T> Bindable for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported {
            type_name: type_name::<Self>(),
        }
    }
}

/// Static per-field binding metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Environment variable to read. Fields with an empty name are skipped.
    pub variable_name: Cow<'static, str>,
    /// Literal used when the variable is unset or empty.
    pub default_value: Option<Cow<'static, str>>,
    pub kind: FieldKind,
}

/// A bindable field: its descriptor plus the slot its value is written to.
#[derive(Debug)]
pub struct Field<'a> {
    descriptor: FieldDescriptor,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(variable_name: impl Into<Cow<'static, str>>, slot: Slot<'a>) -> Self {
        Self {
            descriptor: FieldDescriptor {
                variable_name: variable_name.into(),
                default_value: None,
                kind: slot.kind(),
            },
            slot,
        }
    }

    /// Bind `field` to `variable_name`.
    pub fn bind<T: Bindable + ?Sized>(
        variable_name: impl Into<Cow<'static, str>>,
        field: &'a mut T,
    ) -> Self {
        Self::new(variable_name, field.slot())
    }

    pub fn with_default(mut self, default_value: impl Into<Cow<'static, str>>) -> Self {
        self.descriptor.default_value = Some(default_value.into());
        self
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn into_parts(self) -> (FieldDescriptor, Slot<'a>) {
        (self.descriptor, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_slots_report_width() {
        let mut a = 0i8;
        let mut b = 0i16;
        let mut c = 0i32;
        let mut d = 0i64;
        assert_eq!(a.slot().kind(), FieldKind::Integer { bits: 8 });
        assert_eq!(b.slot().kind(), FieldKind::Integer { bits: 16 });
        assert_eq!(c.slot().kind(), FieldKind::Integer { bits: 32 });
        assert_eq!(d.slot().kind(), FieldKind::Integer { bits: 64 });
    }

    #[test]
    fn test_byte_vec_is_byte_buffer() {
        let mut bytes: Vec<u8> = Vec::new();
        assert_eq!(bytes.slot().kind(), FieldKind::ByteBuffer);
    }

    #[test]
    fn test_non_byte_vec_is_unsupported() {
        let mut words: Vec<String> = Vec::new();
        match words.slot().kind() {
            FieldKind::Unsupported { type_name } => assert!(type_name.contains("Vec")),
            other => panic!("Expected unsupported kind, got {other:?}"),
        }
    }

    #[test]
    fn test_unsigned_is_unsupported() {
        let mut port = 0u16;
        assert!(matches!(
            port.slot().kind(),
            FieldKind::Unsupported { type_name: "u16" }
        ));
    }

    #[test]
    fn test_field_descriptor_follows_slot() {
        let mut timeout = Duration::ZERO;
        let field = Field::bind("EC_TIMEOUT", &mut timeout).with_default("5s");
        let descriptor = field.descriptor();
        assert_eq!(descriptor.variable_name, "EC_TIMEOUT");
        assert_eq!(descriptor.default_value.as_deref(), Some("5s"));
        assert_eq!(descriptor.kind, FieldKind::Duration);
    }
}

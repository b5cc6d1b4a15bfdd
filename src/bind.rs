/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Null,
    String(String),
    Bytes(Vec<u8>),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
    #[cfg(feature = "chrono")]
    DateTime(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "chrono")]
    NaiveDate(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    NaiveDateTime(chrono::NaiveDateTime),
    #[cfg(feature = "time")]
    OffsetDateTime(time::OffsetDateTime),
}

impl Bind {
    pub fn is_null(&self) -> bool {
        matches!(self, Bind::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Bind::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

pub type Binds = Vec<Bind>;

pub trait IntoBind {
    fn into_bind(self) -> Bind;
}

impl IntoBind for Bind {
    fn into_bind(self) -> Bind {
        self
    }
}

impl<T> IntoBind for Option<T>
where
    T: IntoBind,
{
    fn into_bind(self) -> Bind {
        if let Some(value) = self {
            value.into_bind()
        } else {
            Bind::Null
        }
    }
}

impl IntoBind for &str {
    fn into_bind(self) -> Bind {
        Bind::String(self.to_owned())
    }
}

impl IntoBind for &String {
    fn into_bind(self) -> Bind {
        Bind::String(self.clone())
    }
}

impl IntoBind for String {
    fn into_bind(self) -> Bind {
        Bind::String(self)
    }
}

impl IntoBind for Vec<u8> {
    fn into_bind(self) -> Bind {
        Bind::Bytes(self)
    }
}

impl IntoBind for &[u8] {
    fn into_bind(self) -> Bind {
        Bind::Bytes(self.to_vec())
    }
}

macro_rules! impl_into_bind {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoBind for $ty {
                #[inline]
                fn into_bind(self) -> Bind {
                    Bind::$variant(self)
                }
            }

            impl From<$ty> for Bind {
                #[inline]
                fn from(value: $ty) -> Self {
                    Bind::$variant(value)
                }
            }
        )+
    };
}

impl_into_bind! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

#[cfg(feature = "uuid")]
impl_into_bind! { uuid::Uuid => Uuid }

#[cfg(feature = "json")]
impl_into_bind! { serde_json::Value => Json }

#[cfg(feature = "chrono")]
impl_into_bind! {
    chrono::DateTime<chrono::Utc> => DateTime,
    chrono::NaiveDate => NaiveDate,
    chrono::NaiveDateTime => NaiveDateTime,
}

#[cfg(feature = "time")]
impl_into_bind! { time::OffsetDateTime => OffsetDateTime }

impl From<String> for Bind {
    fn from(value: String) -> Self {
        Bind::String(value)
    }
}

impl From<&str> for Bind {
    fn from(value: &str) -> Self {
        Bind::String(value.to_owned())
    }
}

use std::rc::Rc;

use log::debug;

use crate::{
    error::SerializationError,
    interpreter::value::{
        complex::ComplexNumber, core::Value, matrix::Matrix, range::RangeValue,
    },
    util::num::u64_to_usize_checked,
};

const TAG_SCALAR: u8 = 0;
const TAG_MATRIX: u8 = 1;
const TAG_STRING: u8 = 2;
const TAG_RANGE: u8 = 3;
const TAG_VOID: u8 = 4;

type CodecResult<T> = Result<T, SerializationError>;

/// Byte layout of one variant's payload.
///
/// Each implementation writes and reads only its own fields; nested values
/// go back through [`Value`]'s encoding.
trait Codec: Sized {
    fn encode(&self, out: &mut Vec<u8>);
    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self>;
}

/// Cursor over an input buffer that refuses to read past the end.
struct ByteReader<'a> {
    bytes:    &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    const fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn ensure(&self, needed: usize) -> CodecResult<()> {
        if self.remaining() < needed {
            return Err(SerializationError::Truncated { position: self.position,
                                                       needed,
                                                       available: self.remaining() });
        }
        Ok(())
    }

    fn take(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        self.ensure(count)?;
        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_u64(&mut self) -> CodecResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    fn read_f64(&mut self) -> CodecResult<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    fn read_len(&mut self) -> CodecResult<usize> {
        let position = self.position;
        u64_to_usize_checked(self.read_u64()?, position)
    }
}

fn write_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_le_bytes());
}

impl Codec for ComplexNumber {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.real.to_le_bytes());
        out.extend_from_slice(&self.imaginary.to_le_bytes());
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let real = reader.read_f64()?;
        let imaginary = reader.read_f64()?;
        Ok(Self::new(real, imaginary))
    }
}

impl Codec for Matrix {
    fn encode(&self, out: &mut Vec<u8>) {
        write_len(out, self.rows());
        write_len(out, self.columns());
        for &z in self.elements() {
            Value::Scalar(z).encode(out);
        }
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let counter_position = reader.position;
        let rows = reader.read_len()?;
        let columns = reader.read_len()?;

        let count = rows.checked_mul(columns)
                        .ok_or(SerializationError::LengthOverflow { position: counter_position })?;
        // Every element starts with at least its tag byte.
        reader.ensure(count)?;

        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            let position = reader.position;
            match Value::decode(reader)? {
                Value::Scalar(z) => data.push(z),
                _ => {
                    return Err(SerializationError::UnexpectedElement { expected: "Scalar",
                                                                       position });
                },
            }
        }

        Self::new(rows, columns, data).map_err(|_| SerializationError::LengthOverflow { position: counter_position })
    }
}

impl Codec for Rc<str> {
    fn encode(&self, out: &mut Vec<u8>) {
        write_len(out, self.len());
        out.extend_from_slice(self.as_bytes());
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let len = reader.read_len()?;
        let position = reader.position;
        let bytes = reader.take(len)?;
        std::str::from_utf8(bytes).map(Rc::from)
                                  .map_err(|_| SerializationError::InvalidUtf8 { position })
    }
}

impl Codec for RangeValue {
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(u8::from(self.all));
        out.extend_from_slice(&self.start.to_le_bytes());
        out.extend_from_slice(&self.end.to_le_bytes());
        out.extend_from_slice(&self.step.to_le_bytes());
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let position = reader.position;
        let all = match reader.read_u8()? {
            0 => false,
            1 => true,
            flag => return Err(SerializationError::InvalidFlag { flag, position }),
        };
        let start = reader.read_f64()?;
        let end = reader.read_f64()?;
        let step = reader.read_f64()?;
        Ok(Self { start,
                  end,
                  step,
                  all })
    }
}

impl Codec for Value {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Self::Scalar(z) => {
                out.push(TAG_SCALAR);
                z.encode(out);
            },
            Self::Matrix(m) => {
                out.push(TAG_MATRIX);
                m.encode(out);
            },
            Self::String(s) => {
                out.push(TAG_STRING);
                s.encode(out);
            },
            Self::Range(r) => {
                out.push(TAG_RANGE);
                r.encode(out);
            },
            Self::Void => out.push(TAG_VOID),
        }
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let position = reader.position;
        match reader.read_u8()? {
            TAG_SCALAR => ComplexNumber::decode(reader).map(Self::Scalar),
            TAG_MATRIX => Matrix::decode(reader).map(Self::Matrix),
            TAG_STRING => <Rc<str>>::decode(reader).map(Self::String),
            TAG_RANGE => RangeValue::decode(reader).map(Self::Range),
            TAG_VOID => Ok(Self::Void),
            tag => Err(SerializationError::UnknownTag { tag, position }),
        }
    }
}

impl Value {
    /// Encodes the value into its binary form.
    ///
    /// The first byte is the variant tag. Length counters are little-endian
    /// `u64`s and precede the payload they describe; numbers are
    /// little-endian `f64`s. Matrix elements are encoded as complete Scalar
    /// values.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::core::Value;
    ///
    /// let bytes = Value::from("").serialize();
    /// assert_eq!(bytes, vec![2, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        debug!("serialized {} value into {} bytes", self.variant_name(), out.len());
        out
    }

    /// Decodes a value produced by [`Value::serialize`].
    ///
    /// The whole buffer must form exactly one value.
    ///
    /// # Errors
    /// Any [`SerializationError`]; no partially decoded value is ever
    /// returned.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// let value = Value::from(ComplexNumber::new(1.5, -2.0));
    /// let bytes = value.serialize();
    ///
    /// assert_eq!(Value::deserialize(&bytes).unwrap(), value);
    /// assert!(Value::deserialize(&bytes[..bytes.len() - 1]).is_err());
    /// ```
    pub fn deserialize(bytes: &[u8]) -> Result<Self, SerializationError> {
        let mut reader = ByteReader::new(bytes);
        let value = Self::decode(&mut reader)?;

        if reader.remaining() > 0 {
            return Err(SerializationError::TrailingBytes { remaining: reader.remaining() });
        }

        debug!("deserialized {} value from {} bytes", value.variant_name(), bytes.len());
        Ok(value)
    }
}

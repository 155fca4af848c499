//! Serde support for result containers.
//!
//! Containers serialize externally tagged: `{"value": ..}` when ok and
//! `{"error": "message"}` otherwise. A `Status` carries `{"value": null}`.
//! Deserialized errors keep only their message.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::{Status, Val, Vals};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Wire<V, E> {
    Value(V),
    Error(E),
}

fn to_wire<V>(r: &Result<V, Error>) -> Wire<&V, &Error> {
    match r {
        Ok(v) => Wire::Value(v),
        Err(e) => Wire::Error(e),
    }
}

fn from_wire<V>(w: Wire<V, Error>) -> Result<V, Error> {
    match w {
        Wire::Value(v) => Ok(v),
        Wire::Error(e) => Err(e),
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_wire(&self.0).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Wire::<(), Error>::deserialize(deserializer).map(|w| Status(from_wire(w)))
    }
}

impl<T: Serialize> Serialize for Val<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_wire(&self.0).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Val<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Wire::<T, Error>::deserialize(deserializer).map(|w| Val(from_wire(w)))
    }
}

impl<T: Serialize, U: Serialize> Serialize for Vals<T, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_wire(&self.0).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, U: Deserialize<'de>> Deserialize<'de> for Vals<T, U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Wire::<(T, U), Error>::deserialize(deserializer).map(|w| Vals(from_wire(w)))
    }
}

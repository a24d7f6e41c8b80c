use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user record.
///
/// Decoding is lenient in the same ways as the files and payloads written by
/// the original tool:
/// - keys match case-insensitively (`"ID"` fills `id`)
/// - missing fields, `null` fields, and a `null` record decode to defaults
/// - unknown fields are ignored
/// - when a key appears more than once, the last value wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

enum Field {
    Id,
    Email,
    Age,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("id") {
            Some(Field::Id)
        } else if key.eq_ignore_ascii_case("email") {
            Some(Field::Email)
        } else if key.eq_ignore_ascii_case("age") {
            Some(Field::Age)
        } else {
            None
        }
    }
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<User, E> {
        Ok(User::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<User, E> {
        Ok(User::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<User, A::Error> {
        let mut user = User::default();
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Some(Field::Id) => {
                    if let Some(id) = map.next_value::<Option<String>>()? {
                        user.id = id;
                    }
                }
                Some(Field::Email) => {
                    if let Some(email) = map.next_value::<Option<String>>()? {
                        user.email = email;
                    }
                }
                Some(Field::Age) => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        user.age = age;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(user)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UserVisitor)
    }
}

use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use smallvec::SmallVec;

/// Parameters captured from the request path, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Arc<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Sets `name` to `value`, replacing an earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    pub fn clear(&mut self) {
        self.buf.clear()
    }
}

impl Deref for Params {
    type Target = [(Arc<str>, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for Params {
    type Item = (Arc<str>, String);
    type IntoIter = smallvec::IntoIter<[(Arc<str>, String); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Arc<str>>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Borrowed captures produced by a tree lookup.
pub(crate) type CaptureBuf<'t, 'p> = SmallVec<[(&'t Arc<str>, &'p str); 8]>;

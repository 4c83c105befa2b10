use serde::ser::{Serialize, SerializeMap, Serializer};

/// One export row: field names and values in schema order.
///
/// Every record produced for a given platform has the same field names in the
/// same order, so rows of one export always share a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRecord {
    fields: Vec<(&'static str, String)>,
}

impl PlatformRecord {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|(_, value)| value.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for PlatformRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

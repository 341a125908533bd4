//! # Registry Snapshot and Development Fingerprint Map
//!
//! The two containers a provisioning run produces. The snapshot is the
//! production handoff; the fingerprint map exists only for local
//! verification testing and never ships in a production artifact.
//!
//! ## Wire Shapes
//!
//! The snapshot serializes as a bare JSON array of voter records, in
//! batch input order. The fingerprint map serializes as a JSON object
//! from identifier to the `0x`-hex rendering of the template bytes —
//! templates have no implicit `Serialize`, so the encoding here is the
//! single deliberate place a template is written out, and only the
//! development provisioning path ever populates the container.

use std::collections::BTreeMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use rnp_core::{BiometricTemplate, ValidationError, VoterId};
use rnp_credential::VoterRecord;

/// The ordered sequence of voter records handed to the external registry.
///
/// Preserves batch input order; exactly one record per identifier
/// (enforced by the batch provisioner).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot(Vec<VoterRecord>);

impl RegistrySnapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty snapshot with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: VoterRecord) {
        self.0.push(record);
    }

    /// The records in batch input order.
    pub fn records(&self) -> &[VoterRecord] {
        &self.0
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VoterRecord> {
        self.0.iter()
    }

    /// Look up a record by identifier (linear scan; the snapshot is a
    /// handoff artifact, not an index).
    pub fn find(&self, id: &VoterId) -> Option<&VoterRecord> {
        self.0.iter().find(|r| &r.identifier == id)
    }

    /// Consume and return the owned record sequence.
    pub fn into_records(self) -> Vec<VoterRecord> {
        self.0
    }
}

impl IntoIterator for RegistrySnapshot {
    type Item = VoterRecord;
    type IntoIter = std::vec::IntoIter<VoterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegistrySnapshot {
    type Item = &'a VoterRecord;
    type IntoIter = std::slice::Iter<'a, VoterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Identifier-to-template mapping for local verification testing.
///
/// Produced only by development provisioning runs. Physically and
/// logically separate from [`RegistrySnapshot`]: the production
/// verification path never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DevFingerprintMap {
    entries: BTreeMap<VoterId, BiometricTemplate>,
}

impl DevFingerprintMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the template used to enroll `id`.
    pub fn insert(&mut self, id: VoterId, template: BiometricTemplate) {
        self.entries.insert(id, template);
    }

    /// The template enrolled for `id`, if present.
    pub fn get(&self, id: &VoterId) -> Option<&BiometricTemplate> {
        self.entries.get(id)
    }

    /// Whether `id` has an entry.
    pub fn contains(&self, id: &VoterId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&VoterId, &BiometricTemplate)> {
        self.entries.iter()
    }

    /// The identifiers present in the map, in identifier order.
    pub fn identifiers(&self) -> impl Iterator<Item = &VoterId> {
        self.entries.keys()
    }
}

// Templates deliberately have no Serialize impl; the map encodes them
// here, explicitly, as 0x-hex strings. This is the only serialization
// path for template material in the workspace.
impl Serialize for DevFingerprintMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, template) in &self.entries {
            map.serialize_entry(id, &format!("0x{}", hex::encode(template.as_bytes())))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DevFingerprintMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = DevFingerprintMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from voter identifier to 0x-hex template")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = DevFingerprintMap::new();
                while let Some((id, encoded)) = access.next_entry::<VoterId, String>()? {
                    let template =
                        decode_template(&encoded).map_err(serde::de::Error::custom)?;
                    out.insert(id, template);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

fn decode_template(encoded: &str) -> Result<BiometricTemplate, ValidationError> {
    let stripped = encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded);
    let bytes = hex::decode(stripped).map_err(|e| ValidationError::InvalidHex(e.to_string()))?;
    BiometricTemplate::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VoterId {
        VoterId::new(s).unwrap()
    }

    fn record(s: &str) -> VoterRecord {
        use rnp_core::{CredentialTag, HelperData, Salt};
        VoterRecord {
            identifier: id(s),
            salt: Salt::new([0x01; 32]),
            helper: HelperData::new([0x02; 32]),
            tag: CredentialTag::new([0x03; 32]),
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut snapshot = RegistrySnapshot::new();
        for s in ["3", "1", "2"] {
            snapshot.push(record(s));
        }
        let order: Vec<&str> = snapshot
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(order, ["3", "1", "2"]);
    }

    #[test]
    fn snapshot_serializes_as_bare_array() {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.push(record("1"));
        let val = serde_json::to_value(&snapshot).unwrap();
        assert!(val.is_array());
        assert_eq!(val.as_array().unwrap().len(), 1);
        assert_eq!(val[0]["identifier"], "1");
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.push(record("1"));
        snapshot.push(record("2"));
        let json_str = serde_json::to_string(&snapshot).unwrap();
        let back: RegistrySnapshot = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn snapshot_find_by_identifier() {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.push(record("1"));
        snapshot.push(record("2"));
        assert!(snapshot.find(&id("2")).is_some());
        assert!(snapshot.find(&id("99")).is_none());
    }

    #[test]
    fn dev_map_serializes_templates_as_hex() {
        let mut map = DevFingerprintMap::new();
        map.insert(id("1"), BiometricTemplate::from_text("1111").unwrap());
        let val = serde_json::to_value(&map).unwrap();
        // b"1111" = 0x31313131
        assert_eq!(val["1"], "0x31313131");
    }

    #[test]
    fn dev_map_serde_roundtrip() {
        let mut map = DevFingerprintMap::new();
        map.insert(id("1"), BiometricTemplate::from_text("1111").unwrap());
        map.insert(id("2"), BiometricTemplate::from_text("1112").unwrap());
        let json_str = serde_json::to_string(&map).unwrap();
        let back: DevFingerprintMap = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn dev_map_deserialize_rejects_bad_hex() {
        let result: Result<DevFingerprintMap, _> =
            serde_json::from_str(r#"{"1": "0xZZZZ"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn dev_map_deserialize_rejects_empty_template() {
        let result: Result<DevFingerprintMap, _> = serde_json::from_str(r#"{"1": "0x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn dev_map_lookup() {
        let mut map = DevFingerprintMap::new();
        map.insert(id("5"), BiometricTemplate::from_text("1115").unwrap());
        assert!(map.contains(&id("5")));
        assert_eq!(map.get(&id("5")).unwrap().as_bytes(), b"1115");
        assert!(map.get(&id("6")).is_none());
        assert_eq!(map.len(), 1);
    }
}

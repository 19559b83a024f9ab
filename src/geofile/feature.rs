use std::collections::HashSet;

/// Name of the geometry column. It is never offered as a selectable attribute.
pub const GEOMETRY_FIELD: &str = "geometry";

/// A GeoJSON feature collection whose features share a common attribute schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<geojson::Feature>,
}

impl From<geojson::FeatureCollection> for FeatureCollection {
    fn from(value: geojson::FeatureCollection) -> Self {
        Self {
            features: value.features,
        }
    }
}

impl From<FeatureCollection> for geojson::FeatureCollection {
    fn from(value: FeatureCollection) -> Self {
        geojson::FeatureCollection {
            bbox: None,
            features: value.features,
            foreign_members: None,
        }
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Attribute names of the collection in order of first appearance across all features.
    /// The geometry column is excluded.
    pub fn schema(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut schema = Vec::new();
        for properties in self.features.iter().filter_map(|f| f.properties.as_ref()) {
            for key in properties.keys() {
                if key == GEOMETRY_FIELD || seen.contains(key) {
                    continue;
                }
                seen.insert(key.clone());
                schema.push(key.clone());
            }
        }
        schema
    }

    /// Build a new collection keeping only the given attributes, in the given order, plus geometry.
    ///
    /// Features lacking one of the attributes get a `null` value for it. A name selected more than
    /// once appears once, at the position of its first occurrence.
    pub fn select_properties(&self, names: &[String]) -> FeatureCollection {
        let features = self
            .features
            .iter()
            .map(|feature| {
                let mut properties = geojson::JsonObject::new();
                for name in names {
                    if properties.contains_key(name) {
                        continue;
                    }
                    let value = feature
                        .properties
                        .as_ref()
                        .and_then(|props| props.get(name))
                        .cloned()
                        .unwrap_or(geojson::JsonValue::Null);
                    properties.insert(name.clone(), value);
                }
                geojson::Feature {
                    bbox: None,
                    geometry: feature.geometry.clone(),
                    id: feature.id.clone(),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        FeatureCollection { features }
    }
}

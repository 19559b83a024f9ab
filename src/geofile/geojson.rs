use anyhow::{anyhow, Context};
use std::{fs, path::Path};

use super::feature::FeatureCollection;

/// Read a GeoJSON file into a feature collection.
///
/// A document holding a single Feature or a bare Geometry is promoted to a collection with one
/// feature.
pub fn read_feature_collection(input_filepath: &Path) -> anyhow::Result<FeatureCollection> {
    if !input_filepath.exists() {
        return Err(anyhow!("Input file {:?} not found", input_filepath));
    }
    let contents = fs::read_to_string(input_filepath)
        .with_context(|| format!("Reading {:?}", input_filepath))?;
    let geojson_contents: geojson::GeoJson = contents
        .parse()
        .with_context(|| format!("Parsing {:?} as GeoJSON", input_filepath))?;

    let features = match geojson_contents {
        geojson::GeoJson::FeatureCollection(collection) => collection.features,
        geojson::GeoJson::Feature(feature) => vec![feature],
        geojson::GeoJson::Geometry(geometry) => vec![geojson::Feature::from(geometry)],
    };
    log::debug!("Read {} features from {:?}", features.len(), input_filepath);
    Ok(FeatureCollection { features })
}

/// Write the collection to a GeoJSON file, overwriting any existing file.
pub fn write_feature_collection(
    collection: FeatureCollection,
    output_filepath: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = output_filepath.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::info!("Creating output directory {:?}", parent);
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating output directory {:?}", parent))?;
        }
    }
    let feature_collection: geojson::FeatureCollection = collection.into();
    let geojson_contents = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())
        .with_context(|| format!("Writing GeoJSON to {:?}", output_filepath))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use serde_json::json;
    use testdir::testdir;

    use super::{read_feature_collection, write_feature_collection};
    use crate::geofile::feature::FeatureCollection;

    #[rstest]
    fn test_geojson_write_read_round_trip() {
        let mut feature = geojson::Feature::from(geojson::Geometry::from(&geo::LineString::from(
            vec![(10.0, 59.0), (10.5, 59.5)],
        )));
        feature.properties = json!({"navn": "Sti", "lengde": 1.5}).as_object().cloned();
        let collection = FeatureCollection {
            features: vec![feature],
        };

        let test_dir = testdir!();
        let geojson_filepath = test_dir.join("nested").join("output.geojson");
        write_feature_collection(collection.clone(), &geojson_filepath).unwrap();
        let read_collection = read_feature_collection(&geojson_filepath).unwrap();

        assert_eq!(read_collection.len(), 1);
        assert_eq!(read_collection.schema(), vec!["navn", "lengde"]);
        assert_eq!(
            read_collection.features[0].geometry.as_ref().map(|g| &g.value),
            collection.features[0].geometry.as_ref().map(|g| &g.value)
        );
        assert_eq!(
            read_collection.features[0].properties,
            collection.features[0].properties
        );
    }

    #[rstest]
    #[case(r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}, "properties": {"a": 1}}"#, vec!["a"])]
    #[case(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#, vec![])]
    fn test_read_single_feature_documents(#[case] contents: &str, #[case] schema: Vec<&str>) {
        let test_dir = testdir!();
        let geojson_filepath = test_dir.join("input.geojson");
        fs::write(&geojson_filepath, contents).unwrap();

        let collection = read_feature_collection(&geojson_filepath).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.schema(), schema);
    }

    #[rstest]
    fn test_read_missing_file_fails() {
        let test_dir = testdir!();
        let result = read_feature_collection(&test_dir.join("missing.geojson"));
        assert!(result.is_err());
    }

    #[rstest]
    #[case("not json at all")]
    #[case(r#"{"type": "Nonsense"}"#)]
    fn test_read_corrupt_file_fails(#[case] contents: &str) {
        let test_dir = testdir!();
        let geojson_filepath = test_dir.join("corrupt.geojson");
        fs::write(&geojson_filepath, contents).unwrap();
        assert!(read_feature_collection(&geojson_filepath).is_err());
    }
}

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    geofile::geojson::{read_feature_collection, write_feature_collection},
    selection::choose_properties,
};

#[derive(Debug)]
pub struct FilterSummary {
    pub num_features: usize,
    pub selected_properties: Vec<String>,
    pub output_filepath: PathBuf,
}

/// Load `input_filepath`, ask which properties to keep and write the filtered collection to
/// `output_filepath`.
pub fn try_filter_attributes<R: BufRead, W: Write>(
    input_filepath: &Path,
    output_filepath: &Path,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<FilterSummary> {
    writeln!(writer, "Reading GeoJSON file: {}", input_filepath.display())?;
    let collection = read_feature_collection(input_filepath)?;
    if collection.is_empty() {
        log::warn!("{:?} holds no features", input_filepath);
    } else {
        log::info!("Read {} features", collection.len());
    }

    let schema = collection.schema();
    let selected_properties =
        choose_properties(&schema, reader, writer).context("Reading property selection")?;

    let filtered = collection.select_properties(&selected_properties);

    writeln!(
        writer,
        "Saving filtered GeoJSON to {}",
        output_filepath.display()
    )?;
    let num_features = filtered.len();
    write_feature_collection(filtered, output_filepath)?;

    Ok(FilterSummary {
        num_features,
        selected_properties,
        output_filepath: output_filepath.to_path_buf(),
    })
}

/// Same as [`try_filter_attributes`], but any failure is reported to `writer` instead of being
/// returned. Nothing written before the failure is cleaned up.
pub fn filter_attributes<R: BufRead, W: Write>(
    input_filepath: &Path,
    output_filepath: &Path,
    reader: &mut R,
    writer: &mut W,
) -> Option<FilterSummary> {
    let result = try_filter_attributes(input_filepath, output_filepath, reader, writer)
        .and_then(|summary| {
            writeln!(writer, "Filtering completed successfully!")?;
            Ok(summary)
        });
    match result {
        Ok(summary) => Some(summary),
        Err(err) => {
            log::error!("Filtering {:?} failed: {:?}", input_filepath, err);
            // The writer itself may be what failed.
            let _ = writeln!(writer, "An error occurred during filtering: {:#}", err);
            None
        }
    }
}

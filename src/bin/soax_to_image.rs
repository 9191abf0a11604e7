use serde::Serialize;
use soax_raster::batch::{self, convert_batch};
use soax_raster::catalog::Catalog;
use soax_raster::config::convert::{load_config, ErrorPolicy};
use soax_raster::image::io::{save_occupancy_png, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let catalog = Catalog::scan(&config.input_dir)?;
    if catalog.is_empty() {
        return Err(format!(
            "No SOAX exports found under {}",
            config.input_dir.display()
        ));
    }
    log::info!(
        "converting {} logs from {}",
        catalog.len(),
        config.input_dir.display()
    );

    let results = convert_batch(&catalog.paths());
    let (images, failures) = batch::partition(results);

    if config.on_error == ErrorPolicy::AbortAll {
        if let Some(first) = failures.first() {
            return Err(first.to_string());
        }
    }

    let mut written = Vec::with_capacity(images.len());
    for (source, image) in &images {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| format!("Unrepresentable file name: {}", source.display()))?;
        let target = config.output_dir.join(format!("{stem}.png"));
        save_occupancy_png(image, &target)?;
        written.push(WrittenImage {
            source: source.display().to_string(),
            target: target.display().to_string(),
            occupied_cells: image.count_ones(),
        });
    }

    let summary = BatchSummary {
        converted: written.len(),
        failed: failures.len(),
        failures: failures.iter().map(|e| e.to_string()).collect(),
        images: written,
    };
    let summary_path = config.output_dir.join("summary.json");
    write_json_file(&summary_path, &summary)?;

    println!(
        "Converted {} of {} logs; summary written to {}",
        summary.converted,
        summary.converted + summary.failed,
        summary_path.display()
    );
    for failure in &summary.failures {
        eprintln!("skipped: {failure}");
    }

    Ok(())
}

fn usage() -> String {
    "Usage: soax_to_image <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummary {
    converted: usize,
    failed: usize,
    failures: Vec<String>,
    images: Vec<WrittenImage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WrittenImage {
    source: String,
    target: String,
    occupied_cells: usize,
}

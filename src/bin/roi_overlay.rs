use soax_raster::config::overlay::load_config;
use soax_raster::image::io::save_overlay_rgb;
use soax_raster::log_to_image;
use soax_raster::roi::{overlap, rasterize_rois, read_roi_json};
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

    let trace = log_to_image(&config.log_file).map_err(|e| e.to_string())?;

    let archive = read_roi_json(&config.roi_json)?;
    let rois = archive.get(&config.file_key).ok_or_else(|| {
        format!(
            "file key {:?} not present in {} (available: {})",
            config.file_key,
            config.roi_json.display(),
            archive.keys().cloned().collect::<Vec<_>>().join(", ")
        )
    })?;
    let mask = rasterize_rois(rois);

    save_overlay_rgb(&trace, &mask, &config.output_png)?;

    let counts = overlap(&trace, &mask);
    println!(
        "overlap for {:?}: both={} trace-only={} roi-only={} jaccard={:.4}",
        config.file_key,
        counts.both,
        counts.trace_only,
        counts.roi_only,
        counts.jaccard()
    );
    println!("overlay written to {}", config.output_png.display());

    Ok(())
}

fn usage() -> String {
    "Usage: roi_overlay <config.json>".to_string()
}

use std::path::PathBuf;

/// Builds SOAX-style log text: one marker line per filament followed by its
/// data lines in the `s p x y z fg bg` column order.
pub fn synthetic_log(filaments: &[Vec<(f64, f64)>]) -> String {
    let mut text = String::new();
    for (i, points) in filaments.iter().enumerate() {
        text.push_str(&format!("#{}\n", i + 1));
        for (p, &(x, y)) in points.iter().enumerate() {
            text.push_str(&format!(
                "{} {} {} {} 0.0 180.25 90.5\n",
                i + 1,
                p + 1,
                x,
                y
            ));
        }
    }
    text
}

/// Writes `text` into a fresh per-test temp directory and returns the path.
pub fn write_temp_log(test_name: &str, file_name: &str, text: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("soax-raster-tests")
        .join(format!("{}-{}", test_name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(file_name);
    std::fs::write(&path, text).expect("write temp log");
    path
}

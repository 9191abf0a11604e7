mod common;

use common::synthetic_log::{synthetic_log, write_temp_log};
use soax_raster::error::ConvertError;
use soax_raster::image::CANVAS_SIZE;
use soax_raster::log_to_image;
use std::path::Path;

#[test]
fn file_with_two_filaments_converts_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();
    let text = synthetic_log(&[vec![(10.0, 20.0), (11.0, 21.0)], vec![(30.0, 40.0)]]);
    let path = write_temp_log("two_filaments", "AB (1) g--ridge0.03000--stretch0.7000.txt", &text);

    let image = log_to_image(&path).expect("conversion succeeds");

    assert_eq!(image.as_slice().len(), CANVAS_SIZE * CANVAS_SIZE);
    // The fixed mirror+rotate sends pre-transform (x, y) to (y, x).
    assert_eq!(
        image.occupied(),
        vec![(20, 10), (21, 11), (40, 30)],
        "expected exactly the three re-oriented trace points"
    );
}

#[test]
fn log_without_markers_yields_all_zero_image() {
    let path = write_temp_log(
        "no_markers",
        "plain.txt",
        "no delimiter here\n1 2 3 4\nstill nothing\n",
    );
    let image = log_to_image(&path).expect("degenerate log converts");
    assert_eq!(image.count_ones(), 0);
}

#[test]
fn out_of_bounds_point_aborts_with_context() {
    let text = synthetic_log(&[vec![(10.0, 20.0)], vec![(512.0, 40.0)]]);
    let path = write_temp_log("out_of_bounds", "oob.txt", &text);
    let err = log_to_image(&path).unwrap_err();
    match err {
        ConvertError::OutOfBounds {
            filament, coord, ..
        } => {
            assert_eq!(filament, 2);
            assert_eq!(coord, 512);
        }
        other => panic!("expected out-of-bounds error, got {other}"),
    }
}

#[test]
fn format_error_cites_file_and_line() {
    let text = "#1\n1 1 10 20\n1 two 11 21\n";
    let path = write_temp_log("format_error", "bad.txt", text);
    let err = log_to_image(&path).unwrap_err();
    match err {
        ConvertError::Format {
            path: err_path,
            line,
            token,
        } => {
            assert_eq!(err_path, path);
            assert_eq!(line, 3);
            assert_eq!(token, "two");
        }
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn missing_file_reports_io_error() {
    let err = log_to_image(Path::new("/nonexistent/soax/log.txt")).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn conversion_is_a_pure_function_of_the_bytes() {
    let text = synthetic_log(&[vec![(100.0, 200.0), (101.0, 200.0)]]);
    let a = write_temp_log("pure_fn", "a.txt", &text);
    let b = write_temp_log("pure_fn", "b.txt", &text);
    assert_eq!(log_to_image(&a).unwrap(), log_to_image(&b).unwrap());
}

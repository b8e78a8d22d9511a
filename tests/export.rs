use bead_painter::{CellPos, Command, Controller, ExportError, Outcome, PainterConfig, Rgb};

// JPEG is lossy; compare channels with slack
fn assert_black(pixel: [u8; 3]) {
    assert!(pixel.iter().all(|&c| c < 60), "pixel {:?} is not black", pixel);
}

fn assert_light(pixel: [u8; 3]) {
    assert!(pixel.iter().all(|&c| c > 140), "pixel {:?} is not near white", pixel);
}

fn assert_dominant(pixel: [u8; 3], channel: usize) {
    for (i, &c) in pixel.iter().enumerate() {
        if i == channel {
            assert!(c > 160, "pixel {:?} lacks channel {}", pixel, channel);
        } else {
            assert!(c < 100, "pixel {:?} is not pure in channel {}", pixel, channel);
        }
    }
}

#[test]
fn test_save_red_top_left_bead() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.jpg");

    let mut controller = Controller::default();
    controller
        .execute(Command::ChooseColor(Some("#FF0000".parse().unwrap())))
        .unwrap();
    controller.execute(Command::Paint(CellPos::new(0, 0))).unwrap();
    let outcome = controller.execute(Command::Save(Some(path.clone()))).unwrap();
    assert_eq!(outcome, Outcome::Saved(path.clone()));

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (500, 500));

    assert_dominant(image.get_pixel(10, 10).0, 0);
    assert_black(image.get_pixel(30, 10).0);
    assert_black(image.get_pixel(250, 250).0);
    assert_black(image.get_pixel(0, 0).0);
    // White ring around the red bead
    assert_light(image.get_pixel(10, 0).0);
    assert_light(image.get_pixel(0, 10).0);
}

#[test]
fn test_save_writes_exactly_the_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design");
    let mut controller = Controller::default();

    let outcome = controller.execute(Command::Save(Some(path.clone()))).unwrap();
    assert_eq!(outcome, Outcome::Saved(path.clone()));
    assert!(path.exists());
    assert!(!dir.path().join("design.jpg").exists());
}

#[test]
fn test_save_honours_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.jpg");
    let config = PainterConfig {
        grid_size: 4,
        cell_pixel_size: 10,
        ..PainterConfig::default()
    };
    let mut controller = Controller::new(config);
    controller
        .execute(Command::ChooseColor(Some(Rgb::new(0, 0, 255))))
        .unwrap();
    controller.execute(Command::Paint(CellPos::new(3, 3))).unwrap();
    controller.save(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (40, 40));
    assert_dominant(image.get_pixel(35, 35).0, 2);
}

#[test]
fn test_unwritable_path_reports_io_error_and_keeps_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("design.jpg");

    let mut controller = Controller::default();
    controller.execute(Command::Paint(CellPos::new(5, 5))).unwrap();
    let before = controller.grid().clone();

    let err = controller.execute(Command::Save(Some(path))).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }), "got {:?}", err);
    assert_eq!(controller.grid(), &before);
    assert_eq!(controller.history().len(), 1);
}

#[test]
fn test_empty_path_is_cancel() {
    let mut controller = Controller::default();
    assert_eq!(
        controller.execute(Command::Save(Some("".into()))).unwrap(),
        Outcome::Unchanged
    );
}

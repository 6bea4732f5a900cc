use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::Parser;

use log::info;

mod app;
mod args;
mod color;
mod frame;
mod renderer;

use app::App;
use args::Args;
use frame::YuvFrame;

fn main() {
    env_logger::init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let frame = match YuvFrame::from_file(&args.frame, args.width, args.height) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Could not load frame: {e}");
            std::process::exit(-1);
        }
    };

    info!(
        "loaded {}x{} frame from {}",
        frame.width(),
        frame.height(),
        args.frame.display()
    );

    if let Some(path) = &args.dump {
        if let Err(e) = write_png(path, &frame) {
            eprintln!("Could not write {}: {e}", path.display());
            std::process::exit(-1);
        }
        return;
    }

    let app = match App::new(&frame) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Could not initialize renderer: {e}");
            std::process::exit(-1);
        }
    };

    app.run();
}

fn write_png(path: &Path, frame: &YuvFrame) -> Result<(), png::EncodingError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width() as u32, frame.height() as u32);
    encoder.set_color(png::ColorType::Rgba);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.to_rgba())?;

    Ok(())
}

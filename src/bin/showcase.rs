//! Draws a small demonstration picture and saves it as `showcase.png`.

use rasterpen::{Canvas, Error};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut canvas = Canvas::new(400, 300)?;

    // Text is optional: skip it on hosts without the candidate fonts.
    match canvas.draw_text(110, 10, "A fun little picture!", 16.0) {
        Ok(()) => {}
        Err(Error::FontUnavailable { candidates }) => {
            log::warn!("skipping text, no usable font among {candidates:?}");
        }
        Err(e) => return Err(e.into()),
    }

    canvas.pen_mut().set_fill_color("burlywood")?;
    canvas.pen_mut().set_outline_color("dark red")?;
    canvas.pen_mut().set_width(8);
    canvas.fill_rectangle(10, 30, 100, 200)?;

    canvas.pen_mut().set_outline_color("green")?;
    canvas.draw_square(20, 40, 100)?;

    canvas.pen_mut().set_position(140, 150);
    canvas.pen_mut().set_outline_color("purple")?;
    canvas.pen_mut().set_direction(0.0);
    for distance in [100.0, 75.0, 50.0, 25.0, 12.0] {
        canvas.draw_forward(distance)?;
        canvas.pen_mut().rotate(30.0);
    }

    canvas.pen_mut().set_width(2);
    canvas.pen_mut().set_outline_color("aquamarine")?;
    canvas.draw_polygon(&[(250, 200), (300, 200), (275, 250)])?;

    canvas.pen_mut().set_fill_color("cadet blue")?;
    canvas.pen_mut().set_outline_color("black")?;
    canvas.fill_circle(320, 80, 40)?;

    canvas.save("showcase.png")?;
    log::info!("wrote showcase.png");
    println!("wrote showcase.png");
    Ok(())
}

// What you SEE:
// • A window filled with a procedurally generated rusty metal texture.
// • Left click: regenerate (new scratches over the same rust field).
// • S saves the texture as a PNG. ESC quits.
// • --headless skips the window: generate once, save, exit.

use clap::Parser;
use rusty_metal::app::App;
use rusty_metal::config::Args;
use rusty_metal::error::Error;
use rusty_metal::types::FrameBuffer;
use rusty_metal::window::Drawer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    /* --- Texture ---
       Created once, repopulated in full on every regeneration. */
    let mut app = App::new(&args)?;

    if args.headless {
        return app.save();
    }

    /* --- Window + reusable screen buffer --- */
    let mut drawer = Drawer::new("Rusty Metal", args.width, args.height)?;
    let mut screen = FrameBuffer::new(args.width, args.height);
    app.compose_frame(&mut screen);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        if drawer.left_clicked() {
            app.regenerate()?;
            app.compose_frame(&mut screen);
        }

        // A failed save is already logged by App::save; keep the window running.
        if drawer.s_pressed_once() {
            app.save().ok();
        }

        drawer.present(&screen)?;
    }

    Ok(())
}
